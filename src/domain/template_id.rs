/// Prefix shared by every generated template identifier.
pub const ID_PREFIX: &str = "nbp-";

/// Zero-padding width of the numeric suffix (`nbp-001`), uniform across the
/// catalog.
const ID_WIDTH: usize = 3;

/// Extract the numeric suffix of an id, if it carries one.
///
/// Ids that do not follow the `nbp-N` shape contribute nothing to
/// allocation; they are tolerated in hand-edited catalogs.
pub fn numeric_suffix(id: &str) -> Option<u32> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

/// Allocate the next identifier after every id in `known`.
///
/// The result is (max numeric suffix + 1), zero-padded. Callers must pass all
/// ids currently known, including records accepted earlier in the same run,
/// so that allocation stays strictly increasing within one run.
pub fn next_id<'a, I>(known: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = known.into_iter().filter_map(numeric_suffix).max().unwrap_or(0);
    format!("{}{:0width$}", ID_PREFIX, max + 1, width = ID_WIDTH)
}
