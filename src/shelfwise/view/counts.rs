use super::filter::StatusFilter;
use crate::model::{BookRecord, ReadingStatus};

/// Badge counts over the whole, unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub want_to_read: usize,
    pub reading: usize,
    pub finished: usize,
}

impl StatusCounts {
    /// Count shown next to a filter option. Unknown tags have no badge.
    pub fn get(&self, filter: &StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(ReadingStatus::WantToRead) => self.want_to_read,
            StatusFilter::Only(ReadingStatus::Reading) => self.reading,
            StatusFilter::Only(ReadingStatus::Finished) => self.finished,
            StatusFilter::Only(ReadingStatus::Other(_)) => 0,
        }
    }

    /// `all` followed by each known tag, in badge order.
    pub fn badges(&self) -> Vec<(StatusFilter, usize)> {
        std::iter::once(StatusFilter::All)
            .chain(ReadingStatus::KNOWN.into_iter().map(StatusFilter::Only))
            .map(|filter| {
                let count = self.get(&filter);
                (filter, count)
            })
            .collect()
    }

    /// Share of the collection that is finished, in whole percent.
    pub fn finished_percent(&self) -> usize {
        if self.all == 0 {
            0
        } else {
            self.finished * 100 / self.all
        }
    }
}

pub fn status_counts(books: &[BookRecord]) -> StatusCounts {
    books
        .iter()
        .fold(StatusCounts::default(), |mut counts, book| {
            counts.all += 1;
            match book.status {
                ReadingStatus::WantToRead => counts.want_to_read += 1,
                ReadingStatus::Reading => counts.reading += 1,
                ReadingStatus::Finished => counts.finished += 1,
                ReadingStatus::Other(_) => {}
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(statuses: &[ReadingStatus]) -> Vec<BookRecord> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| BookRecord::new("u1", format!("Book {}", i), "A", s.clone()))
            .collect()
    }

    #[test]
    fn counts_each_known_tag() {
        let counts = status_counts(&books(&[
            ReadingStatus::Reading,
            ReadingStatus::Finished,
            ReadingStatus::Finished,
            ReadingStatus::WantToRead,
            ReadingStatus::Other("Paused".into()),
        ]));

        assert_eq!(
            counts,
            StatusCounts {
                all: 5,
                want_to_read: 1,
                reading: 1,
                finished: 2,
            }
        );
        assert_eq!(counts.finished_percent(), 40);
    }

    #[test]
    fn badges_start_with_all() {
        let counts = status_counts(&books(&[ReadingStatus::Reading]));
        let badges = counts.badges();
        assert_eq!(badges.len(), 4);
        assert_eq!(badges[0], (StatusFilter::All, 1));
        assert_eq!(badges[2], (StatusFilter::Only(ReadingStatus::Reading), 1));
    }

    #[test]
    fn empty_collection_counts_zero() {
        let counts = status_counts(&[]);
        assert_eq!(counts, StatusCounts::default());
        assert_eq!(counts.finished_percent(), 0);
    }
}
