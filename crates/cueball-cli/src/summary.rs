use std::path::{Path, PathBuf};

use console::Style;
use cueball_core::session::Classification;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    ball: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ball: Style::new().green().bold(),
        }
    }
}

fn ball_label(ball: u8) -> &'static str {
    match ball {
        0 => "cue",
        8 => "black",
        1..=7 => "solid",
        _ => "stripe",
    }
}

pub fn print_classification_table(results: &[(PathBuf, Classification)]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Classification"));
    println!(
        "  {}",
        s.header
            .apply_to(format!("{:<28}{:>6}  {:<8}{:>9}  {}", "File", "Ball", "Kind", "White %", "Dominant RGB"))
    );

    for (path, c) in results {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let (r, g, b) = c.features.average.to_rgb();
        println!(
            "  {:<28}{:>6}  {:<8}{:>8.1}%  ({}, {}, {})",
            name,
            s.ball.apply_to(c.ball),
            ball_label(c.ball),
            c.features.white_ratio() * 100.0,
            r,
            g,
            b
        );
    }
    println!();
}

pub fn print_features(path: &Path, classification: &Classification) {
    let s = Styles::new();
    let f = &classification.features;
    let (r, g, b) = f.average.to_rgb();
    let (mr, mg, mb) = f.modal.to_rgb();

    println!();
    println!("  {}", s.title.apply_to(path.display()));
    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Ball"),
        s.ball
            .apply_to(format!("{} ({})", classification.ball, ball_label(classification.ball)))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Masked pixels"),
        s.value.apply_to(f.total_pixels)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("White pixels"),
        s.value.apply_to(f.white_pixels)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("White ratio"),
        s.value.apply_to(format!("{:.4}", f.white_ratio()))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Average RGB"),
        s.value.apply_to(format!("({}, {}, {})", r, g, b))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Modal RGB"),
        s.value.apply_to(format!("({}, {}, {})", mr, mg, mb))
    );
    println!(
        "  {:<16}{:?}",
        s.label.apply_to("Min"),
        f.min
    );
    println!(
        "  {:<16}{:?}",
        s.label.apply_to("Max"),
        f.max
    );
    println!();
}
