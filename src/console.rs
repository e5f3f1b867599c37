//! Startup banner and endpoint summary.

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════╗".cyan());
    println!("║  {}                          ║", "sessiongate v0.1.0".bold().white());
    println!("║  {}  ║", "signed sessions and bearer-token guard".dimmed());
    println!("{}", "╚═══════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str, expires_in_secs: i64) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!("  {} {}", "token lifetime:".dimmed(), format!("{}s", expires_in_secs).white());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "POST".yellow(), "/sessions".white(), "Exchange credentials for a token".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/products".white(), "List products".dimmed());
    println!("  {} {}  {} {}", "POST".yellow(), "/products".white(), "Create product".dimmed(), "(Bearer)".magenta());
    println!("  {} {}   {}", "GET ".green(), "/metrics".white(), "Auth counters".dimmed());
    println!("  {} {}    {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
}
