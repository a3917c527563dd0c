//! Page navigation control for paginated tables

use crate::theme;
use eframe::egui;

/// How many pages either side of the current one get their own button
const NEIGHBOURS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Target page, `None` when already on the first page
    Prev(Option<u32>),
    Page(u32),
    Gap,
    /// Target page, `None` when already on the last page
    Next(Option<u32>),
}

/// Buttons to show for `current` of `max_pages`: the first and last page,
/// the current page with its neighbours, and gaps in between.
pub fn page_items(current: u32, max_pages: u32) -> Vec<PageItem> {
    let max_pages = max_pages.max(1);
    let current = current.clamp(1, max_pages);

    let mut items = vec![PageItem::Prev((current > 1).then(|| current - 1))];
    let low = current.saturating_sub(NEIGHBOURS).max(1);
    let high = (current + NEIGHBOURS).min(max_pages);

    if low > 1 {
        items.push(PageItem::Page(1));
        if low > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < max_pages {
        if high + 1 < max_pages {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(max_pages));
    }

    items.push(PageItem::Next((current < max_pages).then(|| current + 1)));
    items
}

/// Render the control. Returns the page the user picked, if any.
pub fn pagination(ui: &mut egui::Ui, current: u32, max_pages: u32) -> Option<u32> {
    let mut picked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        for item in page_items(current, max_pages) {
            match item {
                PageItem::Prev(target) => {
                    let button = theme::button(egui_phosphor::regular::CARET_LEFT);
                    if ui.add_enabled(target.is_some(), button).clicked() {
                        picked = target;
                    }
                }
                PageItem::Next(target) => {
                    let button = theme::button(egui_phosphor::regular::CARET_RIGHT);
                    if ui.add_enabled(target.is_some(), button).clicked() {
                        picked = target;
                    }
                }
                PageItem::Page(page) if page == current => {
                    ui.add(theme::button_accent(page.to_string()));
                }
                PageItem::Page(page) => {
                    if ui.add(theme::button(page.to_string())).clicked() {
                        picked = Some(page);
                    }
                }
                PageItem::Gap => {
                    ui.add(egui::Label::new(
                        egui::RichText::new("…").color(theme::TEXT_DIM),
                    ).selectable(false));
                }
            }
        }
    });

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    #[test]
    fn few_pages_show_all() {
        assert_eq!(
            page_items(1, 3),
            vec![Prev(None), Page(1), Page(2), Page(3), Next(Some(2))]
        );
    }

    #[test]
    fn middle_page_has_gaps_on_both_sides() {
        assert_eq!(
            page_items(10, 20),
            vec![
                Prev(Some(9)),
                Page(1),
                Gap,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Gap,
                Page(20),
                Next(Some(11)),
            ]
        );
    }

    #[test]
    fn no_gap_for_adjacent_edge() {
        assert_eq!(
            page_items(4, 6),
            vec![
                Prev(Some(3)),
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Next(Some(5)),
            ]
        );
    }

    #[test]
    fn last_page_disables_next() {
        let items = page_items(5, 5);
        assert_eq!(items.last(), Some(&Next(None)));
        assert_eq!(items.first(), Some(&Prev(Some(4))));
    }
}
