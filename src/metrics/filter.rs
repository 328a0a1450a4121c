use crate::dataset::{Dataset, Record};

use super::selection::Selection;

/// Records of one entity, ascending by date. Ties keep dataset order.
pub type FilteredSeries<'data> = Vec<&'data Record>;

#[must_use]
pub fn filter<'data>(dataset: &'data Dataset, selection: &Selection) -> FilteredSeries<'data> {
    if selection.range.is_some_and(|range| range.is_inverted()) {
        return Vec::new();
    }

    let mut series: FilteredSeries<'data> = dataset
        .records()
        .iter()
        .filter(|record| record.entity == selection.entity)
        .filter(|record| {
            selection
                .range
                .is_none_or(|range| range.contains(record.date))
        })
        .collect();
    // `sort_by_key` is stable, which keeps equal dates in dataset order.
    series.sort_by_key(|record| record.date);
    series
}
