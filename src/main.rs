// main.rs
//
// Demo of beamtrace2d: solves two rooms and prints every reflection path found for a
// listener, then times repeated listener queries against the prebuilt solver.
// Run with `cargo run --features cli`; set RUST_LOG=debug or trace for solver internals.

use beamtrace2d::{Real, Segment, Solver, SolverConfig, Splitting, ValidationError};
use nalgebra::Point2;
use std::time::Instant;

const QUERY_REPEATS: u32 = 1000;

fn walls(coords: &[[[Real; 2]; 2]]) -> Vec<Segment> {
    coords.iter().map(|&wall| Segment::from(wall)).collect()
}

/// Ten walls: an irregular room with an alcove and a free-standing wall.
fn small_room() -> Vec<Segment> {
    walls(&[
        [[100.0, 130.0], [120.0, 220.0]],
        [[50.0, 55.0], [220.0, 60.0]],
        [[220.0, 60.0], [250.0, 220.0]],
        [[50.0, 220.0], [200.0, 220.0]],
        [[50.0, 220.0], [50.0, 55.0]],
        [[200.0, 220.0], [40.0, 230.0]],
        [[40.0, 230.0], [30.0, 290.0]],
        [[30.0, 290.0], [60.0, 270.0]],
        [[60.0, 270.0], [290.0, 270.0]],
        [[290.0, 270.0], [250.0, 220.0]],
    ])
}

/// Fifty walls: an outer shell with eleven rectangular pieces of furniture.
fn furnished_room() -> Vec<Segment> {
    walls(&[
        [[349.64, 69.03399999999988], [349.64, 678.7939999999999]],
        [[349.64, 678.7939999999999], [758.9939999999999, 678.7939999999999]],
        [[768.9939999999999, 678.7939999999999], [894.8840000000001, 516.2339999999999]],
        [[894.8840000000001, 516.2339999999999], [894.8840000000001, 227.52999999999986]],
        [[894.8840000000001, 227.52999999999986], [768.9939999999999, 69.03399999999988]],
        [[758.9939999999999, 69.03399999999988], [349.64, 69.03399999999988]],
        [[686.0923579850919, 259.72756957693593], [838.492357985092, 259.72756957693593]],
        [[838.492357985092, 259.72756957693593], [838.492357985092, 503.56756957693597]],
        [[838.492357985092, 503.56756957693597], [686.0923579850919, 503.56756957693597]],
        [[686.0923579850919, 503.56756957693597], [686.0923579850919, 259.72756957693593]],
        [[360.48514219945184, 573.0242798626746], [432.74914219945185, 573.0242798626746]],
        [[432.74914219945185, 573.0242798626746], [432.74914219945185, 611.2110798626745]],
        [[432.74914219945185, 611.2110798626745], [360.48514219945184, 611.2110798626745]],
        [[360.48514219945184, 611.2110798626745], [360.48514219945184, 573.0242798626746]],
        [[353.369187006568, 189.35597445989612], [404.18217481144603, 189.35597445989612]],
        [[404.18217481144603, 189.35597445989612], [404.18217481144603, 240.77499885014004]],
        [[404.18217481144603, 240.77499885014004], [353.369187006568, 240.77499885014004]],
        [[353.369187006568, 240.77499885014004], [353.369187006568, 189.35597445989612]],
        [[406.6813189393755, 348.2439476892063], [587.3700901258161, 348.2439476892063]],
        [[587.3700901258161, 348.2439476892063], [587.3700901258161, 408.78639472310465]],
        [[587.3700901258161, 408.78639472310465], [406.6813189393755, 408.78639472310465]],
        [[406.6813189393755, 408.78639472310465], [406.6813189393755, 348.2439476892063]],
        [[617.0735990696775, 147.71153130795935], [632.4276190696775, 147.71153130795935]],
        [[632.4276190696775, 147.71153130795935], [632.4276190696775, 209.38673130795934]],
        [[632.4276190696775, 209.38673130795934], [617.0735990696775, 209.38673130795934]],
        [[617.0735990696775, 209.38673130795934], [617.0735990696775, 147.71153130795935]],
        [[741.9219126297223, 357.4773335555192], [787.8063697725795, 357.4773335555192]],
        [[787.8063697725795, 357.4773335555192], [787.8063697725795, 408.8411049840906]],
        [[787.8063697725795, 408.8411049840906], [741.9219126297223, 408.8411049840906]],
        [[741.9219126297223, 408.8411049840906], [741.9219126297223, 357.4773335555192]],
        [[383.4243443110612, 70.81923765624549], [427.82214431106115, 70.81923765624549]],
        [[427.82214431106115, 70.81923765624549], [427.82214431106115, 128.57043765624547]],
        [[427.82214431106115, 128.57043765624547], [383.4243443110612, 128.57043765624547]],
        [[383.4243443110612, 128.57043765624547], [383.4243443110612, 70.81923765624549]],
        [[292.45422323749585, 329.91055165792716], [509.6542232374958, 329.91055165792716]],
        [[509.6542232374958, 329.91055165792716], [509.6542232374958, 424.3289516579272]],
        [[509.6542232374958, 424.3289516579272], [292.45422323749585, 424.3289516579272]],
        [[292.45422323749585, 424.3289516579272], [292.45422323749585, 329.91055165792716]],
        [[231.94767466798783, 375.29138574408614], [476.9696746679879, 375.29138574408614]],
        [[476.9696746679879, 375.29138574408614], [476.9696746679879, 384.92870574408613]],
        [[476.9696746679879, 384.92870574408613], [231.94767466798783, 384.92870574408613]],
        [[231.94767466798783, 384.92870574408613], [231.94767466798783, 375.29138574408614]],
        [[446.0292461218313, 69.033996561203], [691.0512461218314, 69.033996561203]],
        [[691.0512461218314, 69.033996561203], [691.0512461218314, 78.67131656120299]],
        [[691.0512461218314, 78.67131656120299], [446.0292461218313, 78.67131656120299]],
        [[446.0292461218313, 78.67131656120299], [446.0292461218313, 69.033996561203]],
        [[792.8867633572285, 340.7509395661299], [912.8867633572285, 340.7509395661299]],
        [[912.8867633572285, 340.7509395661299], [912.8867633572285, 423.22253956612985]],
        [[912.8867633572285, 423.22253956612985], [792.8867633572285, 423.22253956612985]],
        [[792.8867633572285, 423.22253956612985], [792.8867633572285, 340.7509395661299]],
    ])
}

fn run(
    name: &str,
    walls: Vec<Segment>,
    source: Point2<Real>,
    listener: Point2<Real>,
    config: SolverConfig,
) -> Result<(), ValidationError> {
    let started = Instant::now();
    let solver = Solver::with_config(walls, source, config)?;
    let build_time = started.elapsed();

    log::info!(
        "{name}: {} walls, beam tree of {} nodes built in {:?}",
        solver.walls().len(),
        solver.beam_tree().len(),
        build_time
    );

    let paths = solver.get_paths(&listener)?;
    println!("{name}: {} paths from {listener} to {source}", paths.len());
    for path in &paths {
        println!(
            "  order {}  length {:>9.3}  walls {:?}",
            path.order(),
            path.length(),
            path.walls()
        );
    }

    let started = Instant::now();
    for _ in 0..QUERY_REPEATS {
        solver.get_paths(&listener)?;
    }
    let per_query = started.elapsed() / QUERY_REPEATS;
    println!("{name}: {per_query:?} per query over {QUERY_REPEATS} queries");
    Ok(())
}

fn main() -> Result<(), ValidationError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    run(
        "small room",
        small_room(),
        Point2::new(200.0, 80.0),
        Point2::new(80.0, 100.0),
        SolverConfig::default(),
    )?;

    run(
        "furnished room",
        furnished_room(),
        Point2::new(460.88300000000015, 103.88600000000008),
        Point2::new(682.3710000000002, 235.45799999999986),
        SolverConfig {
            max_order: 3,
            splitting: Splitting::Balanced,
            ..SolverConfig::default()
        },
    )
}
