//! Overview composer: shade header plus the Primary / Secondary / Neutral sections.

use swatchbook_tokens::PaletteTable;

use super::palette_group::{LabelHandler, PaletteGroupView, render_palette_group};

/// Decorative column headers above the swatch grid.
pub const SHADE_LABELS: [&str; 10] = ["90", "80", "70", "60", "50", "40", "30", "20", "10", "5"];

/// Section titles and the groups each one shows, in display order.
///
/// New palette groups only appear once they are listed here.
pub const SECTIONS: &[(&str, &[&str])] = &[
    ("Primary", &["purple", "orange"]),
    ("Secondary", &["magenta", "blue", "teal", "yellow", "red", "green"]),
    ("Neutral", &["grey"]),
];

#[derive(Debug)]
pub struct SectionView<'h> {
    pub title: &'static str,
    pub groups: Vec<PaletteGroupView<'h>>,
}

/// Render tree for the whole overview page.
#[derive(Debug)]
pub struct OverviewView<'h> {
    pub shade_labels: [&'static str; 10],
    pub sections: Vec<SectionView<'h>>,
}

impl<'h> OverviewView<'h> {
    /// Every group across all sections, in display order.
    pub fn groups(&self) -> impl Iterator<Item = &PaletteGroupView<'h>> + '_ {
        self.sections.iter().flat_map(|section| section.groups.iter())
    }

    /// Group by flat display index.
    pub fn group(&self, index: usize) -> Option<&PaletteGroupView<'h>> {
        self.groups().nth(index)
    }

    /// Flat display index of the group keyed `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.groups().position(|group| group.label.group() == name)
    }

    pub fn group_count(&self) -> usize {
        self.sections.iter().map(|section| section.groups.len()).sum()
    }
}

/// Composes the page. Section membership is fixed by [`SECTIONS`]; the
/// table only supplies the swatches.
pub fn render_overview<'h>(table: &PaletteTable, handler: &'h dyn LabelHandler) -> OverviewView<'h> {
    let sections = SECTIONS
        .iter()
        .map(|&(title, groups)| SectionView {
            title,
            groups: groups.iter().map(|group| render_palette_group(table, group, handler)).collect(),
        })
        .collect();

    OverviewView {
        shade_labels: SHADE_LABELS,
        sections,
    }
}
