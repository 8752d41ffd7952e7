//! Plain-text table rendering for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_width: usize,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            max_width: 48,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width().min(self.max_width));
            }
        }
        widths
    }

    fn push_cell(out: &mut String, text: &str, width: usize) {
        let mut used = 0;
        for ch in text.chars() {
            let w = UnicodeWidthStr::width(ch.encode_utf8(&mut [0; 4]) as &str);
            if used + w > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push_str(&" ".repeat(width - used + 1));
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            Self::push_cell(&mut out, h, *w);
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let rule: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule));
        out.push('\n');

        for row in &self.rows {
            let mut line = String::new();
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                Self::push_cell(&mut line, cell, *w);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
