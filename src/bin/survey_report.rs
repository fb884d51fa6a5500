/// Console survey report over a built-in sample drawing.
///
/// The analysis core never prints; this binary is the reporting
/// collaborator, wired to a synthetic entity set so the pipeline can be
/// exercised without a drawing parser.
///
/// Usage:
///   cargo run --bin survey_report

use anyhow::Result;
use plot_tools::{
    analyze, AnalysisConfig, Category, Color, EntityId, Plot, PlotReport, RawEntity, Vector2,
};

fn main() -> Result<()> {
    let entities = sample_drawing();
    let config = AnalysisConfig::default();
    let report = analyze(&entities, &config)?;

    println!("SURVEY PLOT ANALYSIS");
    println!("scale factor: 1 unit = {} m", config.scale_factor);
    println!();

    for category in [
        Category::Original,
        Category::Final,
        Category::Pending,
        Category::Unassigned,
        Category::Other,
    ] {
        print_category(&report, category);
    }

    let recon = &report.reconciliation;
    println!("RECONCILIATION");
    println!("  pending plots (surveyed, never allotted): {}", recon.pending.len());
    for plot in &recon.pending {
        println!("    {}", describe(plot));
    }
    println!("  unassigned plots (survey number only): {}", recon.unassigned.len());
    for plot in &recon.unassigned {
        println!("    {}", describe(plot));
    }
    println!("  area delta (original - final): {:.2} sq m", recon.area_delta);
    println!();

    if !report.diagnostics.is_empty() {
        println!("DIAGNOSTICS ({})", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}

fn print_category(report: &PlotReport, category: Category) {
    let count = report.count(category);
    if count == 0 {
        return;
    }
    println!("{} PLOTS ({})", category.as_str().to_uppercase(), count);
    println!(
        "  {:<10} {:<12} {:>14} {:>14}  {}",
        "Plot No.", "Survey No.", "Area (sq m)", "Perim (m)", "Layer"
    );
    for plot in report.plots_in(category) {
        println!(
            "  {:<10} {:<12} {:>14.2} {:>14.2}  {}",
            label_or_dash(&plot.plot_number),
            label_or_dash(&plot.survey_number),
            plot.metrics.area_sqm,
            plot.metrics.perimeter_m,
            plot.layer
        );
    }
    println!(
        "  TOTAL: {:.2} sq m over {:.2} m\n",
        report.total_area_sqm(category),
        report.total_perimeter_m(category)
    );
}

fn describe(plot: &Plot) -> String {
    format!(
        "{} {} ({:.2} sq m, layer {})",
        label_or_dash(&plot.plot_number),
        label_or_dash(&plot.survey_number),
        plot.metrics.area_sqm,
        plot.layer
    )
}

fn label_or_dash(label: &Option<plot_tools::PlotLabel>) -> String {
    label
        .as_ref()
        .map(|l| l.value.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// A small town-planning sheet: three original parcels, two of them
/// re-allotted, one parcel on a pending layer, one boundary with only a
/// survey number, and one stray label far from everything.
fn sample_drawing() -> Vec<RawEntity> {
    let mut id = 0u64;
    let mut next = || {
        id += 1;
        EntityId::new(id)
    };

    vec![
        // Original parcels (green)
        rect(next(), "ZoneA", Color::GREEN, Vector2::new(0.0, 0.0), 5.0, 5.0),
        rect(next(), "ZoneA", Color::GREEN, Vector2::new(10.0, 0.0), 5.0, 4.0),
        rect(next(), "ZoneA", Color::GREEN, Vector2::new(20.0, 0.0), 4.0, 4.0),
        // Final allotments (red)
        rect(next(), "ZoneA", Color::RED, Vector2::new(0.0, 20.0), 5.0, 5.0),
        rect(next(), "ZoneA", Color::RED, Vector2::new(10.0, 20.0), 5.0, 4.0),
        // A parcel still on hold
        rect(next(), "Pending1", Color::ByLayer, Vector2::new(30.0, 0.0), 3.0, 3.0),
        // Boundary with a survey number but no plot number
        rect(next(), "ZoneB", Color::GREEN, Vector2::new(40.0, 0.0), 6.0, 4.0),
        // Plot numbers inside the parcels
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(2.5, 2.5), "1"),
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(12.5, 2.0), "2"),
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(22.0, 2.0), "3"),
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(2.5, 22.5), "PLOT 1"),
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(12.5, 22.0), "PLOT 2"),
        // Survey number for the unassigned boundary
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(43.0, 2.0), "R.S. 12"),
        // A label with nothing anywhere near it
        RawEntity::text(next(), "ANNOT", Color::ByLayer, Vector2::new(900.0, 900.0), "99"),
        // Decorative text the matcher should ignore
        RawEntity::text(next(), "TITLE", Color::ByLayer, Vector2::new(0.0, 50.0), "NORTH ARROW"),
    ]
}

fn rect(
    id: EntityId,
    layer: &str,
    color: Color,
    origin: Vector2,
    width: f64,
    height: f64,
) -> RawEntity {
    RawEntity::polyline(
        id,
        layer,
        color,
        vec![
            origin,
            origin + Vector2::new(width, 0.0),
            origin + Vector2::new(width, height),
            origin + Vector2::new(0.0, height),
        ],
        true,
    )
}
