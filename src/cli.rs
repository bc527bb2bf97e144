// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.
use crate::shell::help_text;

pub fn print_help(binary_name: &str) {
    println!(
        "Todolist v{} - An ordered in-memory todo list shell",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--config <path>] [--title <title>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>   Read settings from this TOML file.");
    println!("    -t, --title <title>   Title of the list (overrides the config).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (one per line on stdin):");
    println!("{}", help_text());
    println!();
    println!("EXAMPLES:");
    println!("    add Buy milk");
    println!("    done 0");
    println!("    import {{\"title\": \"Clean room\", \"done\": true}}");
    println!("    show");
}
