use unicode_width::UnicodeWidthStr;

/// Render a boxed text table. Cells are left-aligned and padded to the
/// widest entry of their column (display width, not bytes).
pub(crate) fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border.clone());
    out.push(render_row(&widths, columns.iter().copied()));
    out.push(border.clone());
    for row in rows {
        out.push(render_row(&widths, row.iter().map(String::as_str)));
    }
    if !rows.is_empty() {
        out.push(border);
    }
    out.join("\n")
}

fn render_row<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for width in widths {
        let cell = cells.next().unwrap_or("");
        let pad = width.saturating_sub(cell.width());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
