use colored::Colorize;

use crate::safe_truncate;
use caramelchat_models::ChatRequest;

/// Log HTTP request details for debugging (console output)
pub fn log_request(method: &str, url: &str, request: Option<&ChatRequest>, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST".bright_cyan().bold());
    println!("{}: {} {}", "Request".bright_yellow(), method, url);

    if let Some(request) = request {
        println!("{}", "Body:".bright_yellow());
        match serde_json::to_string_pretty(request) {
            Ok(json) => println!("{}", safe_truncate(&json, 2000)),
            Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
        }
    }

    println!("{}", "═".repeat(60).bright_cyan());
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(url: &str, status: u16, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "─".repeat(60).bright_cyan());
    println!("{}", "📥 HTTP RESPONSE".bright_cyan().bold());
    println!("{}: {} ({})", "From".bright_yellow(), url, status);
    println!("{}", safe_truncate(body, 2000).bright_black());
    println!("{}", "─".repeat(60).bright_cyan());
}
