//! Synthetic WhatsApp export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 100000 heavy_chat.txt

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
];

const PHRASES: &[&str] = &[
    "hello everyone",
    "what's the plan for tonight",
    "pizza at my place",
    "running late, sorry",
    "did you see this",
    "lol",
    "check out https://example.com/article",
    "two links www.example.org and https://example.net here",
    "good night 🌙",
    "😂😂😂",
    "🔥🔥 amazing",
    "<Media omitted>",
    "ok",
    "see you tomorrow then",
];

const SYSTEM_LINES: &[&str] = &[
    "Messages and calls are end-to-end encrypted.",
    "Alice created group \"Weekend plans\"",
    "Alice added Bob",
    "Bob left",
    "Carol changed the subject from \"Weekend plans\" to \"Pizza night\"",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();

    let start = std::time::Instant::now();
    // Walk minutes forward from an arbitrary epoch so timestamps stay ordered
    let mut minutes_since_start: u64 = 0;

    for _ in 0..count {
        minutes_since_start += rng.gen_range(0..30);

        let day = 1 + (minutes_since_start / (24 * 60)) % 28;
        let month = 1 + (minutes_since_start / (24 * 60 * 28)) % 12;
        let year = 2023 + minutes_since_start / (24 * 60 * 28 * 12);
        let hour = (minutes_since_start / 60) % 24;
        let minute = minutes_since_start % 60;

        let prefix = format!("{day}/{month}/{year}, {hour:02}:{minute:02} - ");

        // Roughly one line in twenty is a group notification
        if rng.gen_range(0..20) == 0 {
            let line = SYSTEM_LINES.choose(&mut rng).unwrap();
            writeln!(writer, "{prefix}{line}").unwrap();
            continue;
        }

        let sender = SENDERS.choose(&mut rng).unwrap();
        let phrase = PHRASES.choose(&mut rng).unwrap();
        writeln!(writer, "{prefix}{sender}: {phrase}").unwrap();

        // Occasionally continue the message on extra physical lines
        if rng.gen_range(0..10) == 0 {
            let extra = PHRASES.choose(&mut rng).unwrap();
            writeln!(writer, "{extra}").unwrap();
        }
    }

    writer.flush().unwrap();

    println!(
        "✅ Generated {} messages in {:.2}s",
        count,
        start.elapsed().as_secs_f64()
    );
}
