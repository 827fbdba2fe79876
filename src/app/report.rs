use std::time::Duration;

use crossterm::style::{Attribute, Color, Stylize};
use unicode_width::UnicodeWidthStr;

use super::StrategyTotals;
use crate::solvers::{SearchResult, Strategy};

/// Pads `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}

/// Lays out rows under a header, each column as wide as its widest cell.
fn table(header: &[&str], rows: &[Vec<String>], styled: bool) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| pad(c, w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_line = line(header.iter().map(|h| h.to_string()).collect());
    let mut out = match styled {
        true => format!("{}\n", header_line.with(Color::Cyan).attribute(Attribute::Bold)),
        false => format!("{header_line}\n"),
    };
    for row in rows {
        out.push_str(&line(row.clone()));
        out.push('\n');
    }
    out
}

/// One line per strategy for a single query.
pub fn comparison_table(results: &[(Strategy, SearchResult)], styled: bool) -> String {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|(strategy, result)| {
            vec![
                strategy.to_string(),
                result.termination.to_string(),
                if result.found {
                    result.steps().to_string()
                } else {
                    "-".to_string()
                },
                result.nodes_explored.to_string(),
                result.visited.len().to_string(),
                format_elapsed(result.elapsed),
            ]
        })
        .collect();
    table(
        &["Strategy", "Outcome", "Steps", "Explored", "Visited", "Elapsed"],
        &rows,
        styled,
    )
}

/// One line per strategy for a profiling batch.
pub fn profile_table(totals: &[StrategyTotals], styled: bool) -> String {
    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|t| {
            vec![
                t.strategy.to_string(),
                format!("{}/{}", t.found, t.runs),
                t.steps.to_string(),
                format!("{:.1}", t.mean_explored()),
                t.visited.to_string(),
                format_elapsed(t.elapsed),
            ]
        })
        .collect();
    table(
        &[
            "Strategy",
            "Found",
            "Total steps",
            "Mean explored",
            "Total visited",
            "Total elapsed",
        ],
        &rows,
        styled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::compare;
    use crate::maze::{CellState, Grid, Position};
    use crate::solvers::SolveOptions;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        // Wide characters take two columns.
        assert_eq!(pad("🟩", 3), "🟩 ");
    }

    #[test]
    fn test_comparison_table_layout() {
        let mut grid = Grid::new(3, 3, CellState::Open).unwrap();
        grid.set(Position::new(1, 1), CellState::Wall);
        let results = compare(
            &grid,
            Position::new(0, 0),
            Position::new(2, 2),
            &SolveOptions::default(),
        );
        let table = comparison_table(&results, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 1 + Strategy::ALL.len());
        assert!(lines[0].starts_with("Strategy"));
        assert!(lines[1].starts_with("Breadth-First Search (BFS)"));
        // Every row reports the found outcome and a four-step path.
        assert!(lines[1..].iter().all(|l| l.contains("found") && l.contains(" 4 ")));
        // Columns line up: "Outcome" starts at the same offset in every line.
        let offset = lines[0].find("Outcome").unwrap();
        assert!(lines[1..].iter().all(|l| l[offset..].starts_with("found")));
    }

    #[test]
    fn test_styled_table_rows_match_plain() {
        let grid = Grid::new(4, 4, CellState::Open).unwrap();
        let results = compare(
            &grid,
            Position::new(0, 0),
            Position::new(3, 3),
            &SolveOptions::default(),
        );
        let plain = comparison_table(&results, false);
        let styled = comparison_table(&results, true);
        assert!(styled.ends_with('\n'));
        assert!(styled.lines().next().unwrap().contains("Strategy"));
        // Only the header is styled.
        let plain_rows: Vec<&str> = plain.lines().skip(1).collect();
        let styled_rows: Vec<&str> = styled.lines().skip(1).collect();
        assert_eq!(plain_rows.len(), Strategy::ALL.len());
        assert_eq!(plain_rows, styled_rows);
    }
}
