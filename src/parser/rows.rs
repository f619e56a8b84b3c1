/// Row marker for a drawing summary (date, jackpot, numbers).
pub const SUMMARY_CLASS: &str = "bg-light";
/// Row marker for the dark separator between drawings.
pub const DIVIDER_CLASS: &str = "bg-dark";

/// One table row as read from the page, with no markup left in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Class list of the row element.
    pub classes: Vec<String>,
    /// Text of each emphasized cell, in document order.
    pub emphasized: Vec<String>,
    pub header_cells: usize,
    pub data_cells: usize,
    pub winner_name: Option<String>,
    pub store_name: Option<String>,
    /// Full store paragraph: the store name followed by the address.
    pub store_block: Option<String>,
    /// Whitespace-normalised row text, for diagnostics.
    pub text: String,
}

impl RawRow {
    fn has_marker(&self, class: &str) -> bool {
        matches!(self.classes.as_slice(), [only] if only == class)
    }

    fn has_detail_shape(&self) -> bool {
        self.header_cells > 0 || self.winner_name.is_some() || self.store_block.is_some()
    }

    /// Header cells and nothing else: a section heading inside the winners list.
    pub fn is_header_only(&self) -> bool {
        self.header_cells > 0 && self.data_cells == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    Summary,
    Divider,
    Detail,
    Unclassifiable,
}

pub fn classify(row: &RawRow) -> RowRole {
    if row.has_marker(SUMMARY_CLASS) {
        RowRole::Summary
    } else if row.has_marker(DIVIDER_CLASS) {
        RowRole::Divider
    } else if row.has_detail_shape() {
        RowRole::Detail
    } else {
        RowRole::Unclassifiable
    }
}
