//! # Beamline CLI Application
//!
//! Interactive terminal front-end for the beam_core analysis engine.
//! Prompts for a beam, its supports, and a list of loads, then prints
//! reactions, extrema, and sampled shear/moment diagrams.

use std::io::{self, BufRead, Write};

use beam_core::analysis::{analyze, sample_moment, sample_shear};
use beam_core::beam::BeamSpec;
use beam_core::loads::Load;
use beam_core::supports::{FixedSide, Support};
use beam_core::units::{ForceUnit, LengthUnit, UnitSystem};
use beam_core::Reaction;

fn prompt(text: &str, default: &str) -> String {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(text: &str, default: f64) -> f64 {
    prompt(text, &default.to_string()).parse().unwrap_or(default)
}

fn prompt_units() -> UnitSystem {
    let length = LengthUnit::from_symbol(&prompt("Length unit (m/mm/ft) [m]: ", "m"))
        .unwrap_or(LengthUnit::M);
    let force = ForceUnit::from_symbol(&prompt("Force unit (N/kN/kips) [kN]: ", "kN"))
        .unwrap_or(ForceUnit::Kn);
    UnitSystem::new(length, force)
}

fn prompt_support(length: f64) -> Support {
    match prompt("Support scheme (pin-roller/fixed) [pin-roller]: ", "pin-roller").as_str() {
        "fixed" => {
            let side = match prompt("Fixed side (left/right) [left]: ", "left").as_str() {
                "right" => FixedSide::Right,
                _ => FixedSide::Left,
            };
            Support::fixed(side)
        }
        _ => {
            let pin_x = prompt_f64("Pin position [0]: ", 0.0);
            let roller_x = prompt_f64(&format!("Roller position [{}]: ", length), length);
            Support::pin_roller(pin_x, roller_x)
        }
    }
}

fn prompt_loads(units: &UnitSystem) -> Vec<Load> {
    let mut loads = Vec::new();
    loop {
        let kind = prompt(
            "Add load (point/angled/udl/uvl/moment/done) [done]: ",
            "done",
        );
        let n = loads.len() + 1;
        let load = match kind.as_str() {
            "point" => {
                let x = prompt_f64("  position x: ", 0.0);
                let p = prompt_f64(&format!("  magnitude ({}, down +): ", units.force), 0.0);
                Load::point(x, p)
            }
            "angled" => {
                let x = prompt_f64("  position x: ", 0.0);
                let p = prompt_f64(&format!("  magnitude ({}): ", units.force), 0.0);
                let theta = prompt_f64("  angle from +x axis (deg, ccw): ", 90.0);
                Load::angled(x, p, theta)
            }
            "udl" => {
                let a = prompt_f64("  span start a: ", 0.0);
                let b = prompt_f64("  span end b: ", 0.0);
                let w = prompt_f64(
                    &format!("  intensity ({}/{}, down +): ", units.force, units.length),
                    0.0,
                );
                Load::udl(a, b, w)
            }
            "uvl" => {
                let a = prompt_f64("  span start a: ", 0.0);
                let b = prompt_f64("  span end b: ", 0.0);
                let w1 = prompt_f64("  intensity at a: ", 0.0);
                let w2 = prompt_f64("  intensity at b: ", 0.0);
                Load::uvl(a, b, w1, w2)
            }
            "moment" => {
                let x = prompt_f64("  position x: ", 0.0);
                let m = prompt_f64(
                    &format!("  moment ({}*{}, ccw +): ", units.force, units.length),
                    0.0,
                );
                Load::moment(x, m)
            }
            _ => break,
        };
        loads.push(load.with_label(format!("L{}", n)));
    }
    loads
}

fn print_diagram(title: &str, points: &[(f64, f64)]) {
    println!("{}:", title);
    for (x, v) in points {
        println!("  x = {:>8.3}   {:>12.3}", x, v);
    }
    println!();
}

fn main() {
    println!("Beamline CLI - Single-Span Beam Analysis");
    println!("========================================");
    println!();

    let units = prompt_units();
    let length = prompt_f64(&format!("Beam length ({}) [10]: ", units.length), 10.0);
    let beam = BeamSpec::new(length, units);
    let support = prompt_support(length);
    let loads = prompt_loads(&units);

    println!();
    let result = analyze(&beam, &support, &loads);

    if !result.is_valid {
        println!(
            "Analysis failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
        return;
    }

    println!("=======================================");
    println!("  BEAM ANALYSIS RESULTS ({})", units);
    println!("=======================================");
    println!();
    println!("Reactions:");
    for reaction in &result.reactions {
        match reaction {
            Reaction::Vertical { at, x, r } => {
                println!("  {:<8} R = {:>10.3} {}  at x = {:.3}", at, r, units.force, x)
            }
            Reaction::Moment { at, x, m } => println!(
                "  {:<8} M = {:>10.3} {}*{}  at x = {:.3}",
                at, m, units.force, units.length, x
            ),
            Reaction::Horizontal { at, h } => {
                println!("  {:<8} H = {:>10.3} {}", at, h, units.force)
            }
        }
    }
    println!();
    println!("Extrema:");
    println!(
        "  Vmax = {:>10.3} {} at x = {:.3}",
        result.extrema.v_max, units.force, result.extrema.v_max_x
    );
    println!(
        "  Vmin = {:>10.3} {} at x = {:.3}",
        result.extrema.v_min, units.force, result.extrema.v_min_x
    );
    println!(
        "  Mmax = {:>10.3} {}*{} at x = {:.3}",
        result.extrema.m_max, units.force, units.length, result.extrema.m_max_x
    );
    println!(
        "  Mmin = {:>10.3} {}*{} at x = {:.3}",
        result.extrema.m_min, units.force, units.length, result.extrema.m_min_x
    );
    println!();

    if prompt("Print diagram samples? (y/n) [n]: ", "n") == "y" {
        print_diagram("Shear", &sample_shear(&result.shear));
        print_diagram("Moment", &sample_moment(&result.moment));
    }

    if prompt("Dump full result as JSON? (y/n) [n]: ", "n") == "y" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("serialization failed: {}", e),
        }
    }
}
