use bf_core::presentation::tone_for_stored;

/// Narrowest a column is squeezed to when the terminal is too small.
const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
///
/// Cells are padded as plain text and only then wrapped in colour codes, so
/// alignment never has to see escape sequences.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let floors: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().max(MIN_COLUMN))
        .collect();
    let mut widths: Vec<usize> = floors
        .iter()
        .enumerate()
        .map(|(col, floor)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .fold(*floor, usize::max)
        })
        .collect();
    if let Some(limit) = options.max_width {
        shrink_to(&mut widths, &floors, limit);
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(&clip(h, w), w, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header.chars().count());

    let mut lines = vec![header, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, &w)| {
                let text = clip(row.get(col).map_or("-", String::as_str), w);
                let cell = pad(&text, w, is_numeric(&text));
                if options.color {
                    paint(&text, cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Take one character at a time from the widest column still above its floor.
fn shrink_to(widths: &mut [usize], floors: &[usize], limit: usize) {
    let total = |w: &[usize]| w.iter().sum::<usize>() + GAP.len() * w.len().saturating_sub(1);
    while total(widths) > limit {
        let widest = widths
            .iter()
            .zip(floors)
            .enumerate()
            .filter(|(_, (w, floor))| w > floor)
            .max_by_key(|(idx, (w, _))| (**w, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);
        match widest {
            Some(idx) => widths[idx] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

/// Colour a padded cell by the stored value it shows.
fn paint(value: &str, cell: String) -> String {
    match tone_for_stored(value) {
        Some(tone) => format!("\u{1b}[{}m{cell}\u{1b}[0m", tone.ansi()),
        None => cell,
    }
}
