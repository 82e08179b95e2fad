use crate::errors::AppResult;
use crate::store::read_journal;
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const OP_WIDTH: usize = 40;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI color by operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "scan" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "config_migration" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(data_dir: &Path) -> AppResult<()> {
        let entries = read_journal(data_dir)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(25);

        println!("📜 Internal log:\n");

        for (i, e) in entries.iter().enumerate() {
            let color = color_for_operation(&e.operation);

            let mut op_target = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            // padding measured without ANSI codes
            let visible = strip_ansi(&op_target);
            let padding = " ".repeat(OP_WIDTH.saturating_sub(visible.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
