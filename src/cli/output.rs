//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Status messages go to
//! stderr, so redacted content on stdout stays clean.  Only the secrets
//! table and metadata view print to stdout.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::SecretMetadata;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of secret metadata (Name, Description, Created, Length).
pub fn print_secrets_table(secrets: &[SecretMetadata]) {
    if secrets.is_empty() {
        info("No secrets in this vault yet.");
        tip("Run `agent-vault set <name>` to add your first secret.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Description", "Created", "Length"]);

    for s in secrets {
        table.add_row(vec![
            s.name.clone(),
            s.description.clone().unwrap_or_default(),
            s.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            s.length.to_string(),
        ]);
    }

    println!("{table}");
}

/// Print one secret's metadata as aligned key/value lines.
pub fn print_metadata(meta: &SecretMetadata) {
    println!("{:<12} {}", style("name").bold(), meta.name);
    println!(
        "{:<12} {}",
        style("description").bold(),
        meta.description.as_deref().unwrap_or("-")
    );
    println!(
        "{:<12} {}",
        style("created").bold(),
        meta.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("{:<12} {} bytes", style("length").bold(), meta.length);
}
