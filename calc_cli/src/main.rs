//! # Flexa CLI Application
//!
//! Terminal front end for the flexural design engine.
//!
//! - `calc_cli` runs the demonstration cases (a beam under both codes and a
//!   slab strip) and prints sections, code parameters and JSON results.
//! - `calc_cli <project.rcd>` loads a project and designs every case in it.
//!
//! Logging goes to stderr; set `CALC_LOG` (e.g. `CALC_LOG=calc_core=debug`)
//! to change the filter.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Once;

use calc_core::codes::DesignCode;
use calc_core::materials::{ConcreteClass, SteelGrade};
use calc_core::sections::ConcreteSection;
use calc_core::units::{KilonewtonMeters, NewtonMillimeters, SquareCentimeters, SquareMillimeters};
use calc_core::{load_project, CalcError, CalcResult, FlexuralResult};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr subscriber once; `CALC_LOG` overrides the default filter.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CALC_LOG").unwrap_or_else(|_| EnvFilter::new("calc_core=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}

fn main() -> ExitCode {
    init_tracing();

    let outcome = match std::env::args().nth(1) {
        Some(path) => run_project(Path::new(&path)),
        None => run_demo(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Demonstration cases: beam V1 under both codes, slab L1 under NBR 6118.
fn run_demo() -> CalcResult<()> {
    println!("Flexa - Reinforced Concrete Flexural Design");
    println!("===========================================");
    println!();

    let nbr6118 = DesignCode::nbr6118();
    let eurocode2 = DesignCode::eurocode2();

    let mk: NewtonMillimeters = KilonewtonMeters(70.0).into();
    let mut beam = ConcreteSection::beam_with_class(150.0, 500.0, ConcreteClass::C20)?
        .with_grade(SteelGrade::CA50);

    for code in [nbr6118, eurocode2] {
        let result = beam.design(mk.value(), &code)?;
        print_case("V1", &beam, &code, &result)?;
    }

    let mut slab = ConcreteSection::slab_with_class(150.0, ConcreteClass::C20)?.with_grade(SteelGrade::CA50);
    let mk: NewtonMillimeters = KilonewtonMeters(5.0).into();
    let result = slab.design(mk.value(), &nbr6118)?;
    print_case("L1", &slab, &nbr6118, &result)?;

    Ok(())
}

fn print_case(label: &str, section: &ConcreteSection, code: &DesignCode, result: &FlexuralResult) -> CalcResult<()> {
    let msd: KilonewtonMeters = NewtonMillimeters(result.design_moment_nmm).into();

    println!("═══════════════════════════════════════");
    println!("  {} - {}", label, code.kind);
    println!("═══════════════════════════════════════");
    println!("{}", section);
    println!("{}", section.steel);
    println!("{}", code.parameters(section.fck_mpa)?);
    println!();
    println!("  Msd = {:.2} kN·m, x = {:.2} mm (x/d = {:.3})",
        msd.value(),
        result.neutral_axis_mm,
        result.depth_ratio(section.depth_mm)
    );
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
    println!();
    Ok(())
}

/// Load a project file and design every case in it.
fn run_project(path: &Path) -> CalcResult<()> {
    tracing::info!(path = %path.display(), "designing project");
    let project = load_project(path)?;
    println!("Project {} - {} ({})", project.meta.job_id, project.meta.client, project.meta.engineer);
    println!();
    println!("{:<12} {:<8} {:>12} {:>12} {:>12} {:>10}  Status",
        "Label", "Type", "As (cm²)", "As2 (cm²)", "Total (cm²)", "x (mm)");

    for (id, outcome) in project.design_all() {
        let (label, calc_type) = project
            .get_item(&id)
            .map(|item| (item.label(), item.calc_type()))
            .unwrap_or(("?", "?"));
        match outcome {
            Ok(result) => {
                let rebar = result.reinforcement;
                let as_cm2: SquareCentimeters = SquareMillimeters(rebar.as_mm2).into();
                let as2_cm2: SquareCentimeters = SquareMillimeters(rebar.as2_mm2).into();
                let total_cm2: SquareCentimeters = SquareMillimeters(rebar.total_mm2()).into();
                println!("{:<12} {:<8} {:>12.2} {:>12.2} {:>12.2} {:>10.1}  [OK]",
                    label, calc_type, as_cm2.value(), as2_cm2.value(), total_cm2.value(), result.neutral_axis_mm);
            }
            Err(e) => println!("{:<12} {:<8} {:>12} {:>12} {:>12} {:>10}  [{}] {}",
                label, calc_type, "-", "-", "-", "-", e.error_code(), e),
        }
    }
    Ok(())
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
