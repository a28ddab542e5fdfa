use welldeck::{CompletionRecord, Schedule};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_schedule(path: &str, schedule: &Schedule, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsed: {path}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Effective dates ━━━", ansi::GRAY));
    if schedule.dated.is_empty() {
        println!("{}", palette.dim("  No dated completions"));
    }
    for (date, records) in schedule.dated.iter() {
        println!(
            "  {} {}",
            palette.paint(date, ansi::BLUE),
            palette.paint(format!("✓ {} completions", records.len()), ansi::GREEN)
        );
        for record in records {
            println!("    {}", fmt_record_compact(record, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Undated ━━━", ansi::GRAY));
    if schedule.undated.is_empty() {
        println!("{}", palette.dim("  No completions before the first DATES block"));
    }
    for record in &schedule.undated {
        println!("  {}", fmt_record_compact(record, &palette));
    }

    if !schedule.issues.is_empty() {
        println!("\n{}", palette.paint("━━━ Issues ━━━", ansi::GRAY));
        for issue in &schedule.issues {
            println!(
                "  {} {}",
                palette.paint(format!("line {}:", issue.line), ansi::YELLOW),
                issue.error
            );
        }
    }
    println!();
}

pub fn print_query_hit(record: &CompletionRecord, color: bool) {
    let palette = ansi::Palette::new(color);
    let data = record.data();

    println!("\n{}", palette.bold(palette.paint(fmt_record_compact(record, &palette), ansi::GREEN)));
    println!(
        "  {} {}..{}  {} {}  {} {}  {} {}",
        palette.dim("k:"),
        data.k_upper,
        data.k_lower,
        palette.dim("│ sat:"),
        data.saturation_table,
        palette.dim("│ trans:"),
        data.transmissibility_factor,
        palette.dim("│ diam:"),
        data.well_bore_diameter,
    );
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        palette.dim("kh:"),
        data.kh,
        palette.dim("│ skin:"),
        data.skin_factor,
        palette.dim("│ d-factor:"),
        data.d_factor,
        palette.dim("│ r_eq:"),
        data.pressure_equivalent_radius,
    );
    println!();
}

pub fn print_query_miss(date: &str, well: &str, status: &str, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}",
        palette.paint(format!("No completion for {well} ({status}) under {date}"), ansi::YELLOW)
    );
    println!();
}

fn fmt_record_compact(record: &CompletionRecord, palette: &ansi::Palette) -> String {
    let data = record.data();
    let grid = match record.local_grid_name() {
        Some(name) => palette.dim(format!(" in {name}")),
        None => String::new(),
    };
    format!(
        "{}{} {} {}",
        palette.paint(record.name(), ansi::CYAN),
        grid,
        palette.paint(format!("[{}, {}]", data.i, data.j), ansi::YELLOW),
        palette.paint(record.status().as_str(), ansi::BLUE),
    )
}
