use crate::index::DocId;

/// Intersect sorted postings lists with a synchronized k-way merge.
///
/// One cursor per list. Each round reads the id under every cursor: if they
/// all agree, that document is in every list, so it is emitted and every
/// cursor moves on; otherwise only the cursors sitting on the smallest id
/// can be behind, and all of them advance to catch up. The merge ends as
/// soon as any list runs out, since nothing further can appear in all of
/// them.
///
/// Inputs must be sorted ascending with no duplicates, which is how the
/// postings store builds them. Runs in time proportional to the total
/// length of the inputs; the output is ascending and duplicate-free.
pub fn intersect_postings(lists: &[&[DocId]]) -> Vec<DocId> {
    if lists.is_empty() {
        return Vec::new();
    }

    let mut cursors = vec![0usize; lists.len()];
    let mut matches = Vec::new();

    loop {
        let mut min = DocId::MAX;
        let mut max = 0;
        for (cursor, list) in cursors.iter().zip(lists) {
            match list.get(*cursor) {
                Some(&id) => {
                    min = min.min(id);
                    max = max.max(id);
                }
                None => return matches,
            }
        }

        if min == max {
            matches.push(min);
            for cursor in &mut cursors {
                *cursor += 1;
            }
        } else {
            for (cursor, list) in cursors.iter_mut().zip(lists) {
                if list[*cursor] == min {
                    *cursor += 1;
                }
            }
        }
    }
}
