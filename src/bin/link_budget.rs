//! Link budget worksheet for the optical data link receiver front end
//!
//! Prints the full receiver budget for each link direction: detector solid
//! angle, irradiance, photodiode photocurrent and SNR against dark current,
//! LED luminous efficacy, and the phototransistor collector-current
//! estimates under both reference models.

use clap::{Parser, ValueEnum};
use linkbudget::datasheet::{ALL_LINKS, DOWNLINK, PHOTOTRANSISTOR_RESPONSE, UPLINK};
use linkbudget::photometry::PHOTOPIC;
use linkbudget::units::LengthExt;
use linkbudget::{
    collector_current_a, luminous_efficacy_lm_per_w, viz, LinkParams, PhotodiodeBudget,
    ReferenceModel,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Uplink,
    Downlink,
}

#[derive(Parser, Debug)]
#[command(
    name = "Link Budget Worksheet",
    about = "Computes receiver front-end budgets (irradiance, photocurrent, SNR) for the optical link",
    long_about = None
)]
struct Args {
    /// Link direction to analyze (if not specified, analyzes both)
    #[arg(long)]
    direction: Option<Direction>,

    /// Override the emitter-detector gap in millimeters
    #[arg(long)]
    distance_mm: Option<f64>,

    /// Write a PNG of the spectral curves to this path
    #[arg(long)]
    plot: Option<String>,
}

fn print_budget(params: &LinkParams) {
    println!("{}", params.direction.label());
    println!("{:-<58}", "");

    println!(
        "  Gap: {:.1} mm, detector: {:.1} x {:.1} mm",
        params.distance().as_millimeters(),
        params.detector_side().as_millimeters(),
        params.detector_side().as_millimeters()
    );
    println!(
        "  LED: {:.1} mW/sr at {:.0} mA, driven at {:.0} mA",
        params.led_radiant_intensity_w_sr * 1e3,
        params.led_test_current_ma,
        params.led_drive_current_ma
    );

    let budget = PhotodiodeBudget::from_params(params);

    println!();
    println!("  Photodiode path");
    println!("    Solid angle:   {:.4} sr", budget.solid_angle_sr);
    println!(
        "    Irradiance:    {:.3} mW/cm2 ({:.1} W/m2)",
        budget.irradiance_mw_per_cm2(),
        budget.irradiance_w_per_m2
    );
    println!(
        "    Photocurrent:  {:.3} mA",
        budget.photocurrent_a * 1e3
    );
    println!(
        "    SNR vs {:.0} nA dark current: {:.1} dB",
        params.dark_current_na, budget.snr_db
    );

    println!();
    println!("  Phototransistor path");
    println!(
        "    LED luminous efficacy: {:.1} lm/W",
        luminous_efficacy_lm_per_w(&params.led_emission)
    );
    for model in [ReferenceModel::PhotopicTable, ReferenceModel::Blackbody] {
        let current = collector_current_a(params, model);
        println!(
            "    Collector current ({}): {:.3} mA",
            match model {
                ReferenceModel::PhotopicTable => "photopic table",
                ReferenceModel::Blackbody => "blackbody",
            },
            current * 1e3
        );
    }

    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Optical Link Budget Worksheet");
    println!("=============================");
    println!();

    let selected: Vec<&LinkParams> = match args.direction {
        Some(Direction::Uplink) => vec![&*UPLINK],
        Some(Direction::Downlink) => vec![&*DOWNLINK],
        None => ALL_LINKS.clone(),
    };

    for params in selected {
        match args.distance_mm {
            Some(distance_mm) => print_budget(&params.at_distance_mm(distance_mm)),
            None => print_budget(params),
        }
    }

    if let Some(path) = args.plot {
        viz::plot_spectral_curves(
            &path,
            &[
                ("Photopic observer", &*PHOTOPIC),
                ("Downlink LED", &DOWNLINK.led_emission),
                ("Uplink LED", &UPLINK.led_emission),
                ("Phototransistor", &*PHOTOTRANSISTOR_RESPONSE),
            ],
        )?;
        println!("Plot saved to: {}", path);
    }

    println!("Note: phototransistor estimates assume the datasheet reference");
    println!("      condition of 1000 lx CIE illuminant A (2856 K).");

    Ok(())
}
