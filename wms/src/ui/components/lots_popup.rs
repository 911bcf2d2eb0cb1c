use itertools::Itertools;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::ui::{layouts, theme, utils};
use wms_api::endpoints::lots::LotRecord;

/// Distinct subinventories holding the lots, sorted
fn subinventory_summary(lots: &[&LotRecord]) -> String {
    let summary = lots
        .iter()
        .filter_map(|lot| lot.sub_inventory_code.as_deref())
        .filter(|sub| !sub.is_empty())
        .unique()
        .sorted()
        .join(", ");

    if summary.is_empty() {
        utils::or_na(None)
    } else {
        summary
    }
}

/// Render the lots of one on-hand item
pub fn render_lots_popup(f: &mut Frame, item_code: &str, lots: &[&LotRecord]) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        &format!(" Lots for {} (Esc to close) ", item_code),
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    let summary = Line::from(vec![
        Span::styled(format!("{} lot(s)", lots.len()), theme::header_style()),
        Span::raw("  in "),
        Span::raw(subinventory_summary(lots)),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[0]);

    if lots.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No lots found for this item", theme::muted_style())),
            chunks[1],
        );
        return;
    }

    let rows: Vec<Row> = lots
        .iter()
        .map(|lot| {
            Row::new(vec![
                utils::or_na(lot.lot_number()),
                utils::fmt_quantity(lot.primary_quantity),
                utils::or_na(lot.sub_inventory_code.as_deref()),
                utils::or_na(lot.material_status.as_deref()),
                utils::or_na(lot.expiration_date.as_deref()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(vec!["Lot", "Qty", "Subinventory", "Status", "Expires"])
            .style(theme::header_style())
            .bottom_margin(1),
    )
    .column_spacing(theme::TABLE_COLUMN_SPACING);

    f.render_widget(table, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(sub: Option<&str>) -> LotRecord {
        LotRecord {
            id: "0".to_string(),
            sub_inventory_code: sub.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_subinventory_summary_is_distinct_and_sorted() {
        let lots = [lot(Some("STORES")), lot(Some("DOCK")), lot(Some("STORES")), lot(None)];
        let refs: Vec<&LotRecord> = lots.iter().collect();

        assert_eq!(subinventory_summary(&refs), "DOCK, STORES");
    }

    #[test]
    fn test_subinventory_summary_without_values() {
        let lots = [lot(None), lot(Some(""))];
        let refs: Vec<&LotRecord> = lots.iter().collect();

        assert_eq!(subinventory_summary(&refs), "N/A");
    }
}
