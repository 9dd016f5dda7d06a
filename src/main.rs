use clap::{Parser, Subcommand};

mod model;
mod render;
mod series;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "speedup-report")]
#[command(about = "Password-cracking speedup report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the speedup chart and print the analysis summary.
    Report {
        /// Measurement file overriding the built-in benchmark numbers
        /// (rows of: series_name workers elapsed_secs).
        #[arg(long)]
        measurements: Option<String>,

        #[arg(short = 'o', long, default_value = "speedup_chart.html")]
        out: String,

        /// Also write the report data as JSON.
        #[arg(long)]
        json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            measurements,
            out,
            json,
        } => {
            // 1) Built-in benchmark data, optionally overridden from a file.
            let mut series = series::builtin_series();
            if let Some(path) = &measurements {
                series::parse::apply_measurement_file(path, &mut series)?;
            }

            // 2) Validate + derive speedups and efficiencies.
            let data = model::build_report_data(&series)?;

            // 3) Render the chart artifact.
            let svg = render::chart::render_chart_svg(&data)?;
            let html = render::html::render_html_page(&data, &svg)?;

            // 4) Print the analysis summary, then write artifacts.
            print!("{}", render::summary::render_summary(&data)?);

            std::fs::write(&out, html)?;
            println!("Wrote {}", out);

            if let Some(path) = &json {
                std::fs::write(path, serde_json::to_string_pretty(&data)?)?;
                println!("Wrote {}", path);
            }
        }
    }

    Ok(())
}
