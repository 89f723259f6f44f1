//! Test support library
//! Provides fixture rooms & comparison helpers for tests.
#![allow(dead_code)]

use beamtrace2d::{Real, Segment, Wall};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_point(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

pub fn walls(coords: &[[[Real; 2]; 2]]) -> Vec<Wall> {
    coords.iter().map(|&wall| Segment::from(wall)).collect()
}

/// Every wall with its endpoints swapped.
pub fn reversed(walls: &[Wall]) -> Vec<Wall> {
    walls.iter().map(Segment::reversed).collect()
}

/// The ten-wall reference room: an irregular hall with an alcove and one free-standing wall.
pub fn canonical_room() -> Vec<Wall> {
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

pub fn canonical_source() -> Point2<Real> {
    Point2::new(200.0, 80.0)
}

pub fn canonical_listener() -> Point2<Real> {
    Point2::new(80.0, 100.0)
}

/// A convex 100 x 60 box.
pub fn rectangle_room() -> Vec<Wall> {
    walls(&[
        [[0.0, 0.0], [100.0, 0.0]],
        [[100.0, 0.0], [100.0, 60.0]],
        [[100.0, 60.0], [0.0, 60.0]],
        [[0.0, 60.0], [0.0, 0.0]],
    ])
}

pub fn rectangle_source() -> Point2<Real> {
    Point2::new(30.0, 20.0)
}

pub fn rectangle_listener() -> Point2<Real> {
    Point2::new(70.0, 40.0)
}

/// Fifty walls: an outer shell with eleven rectangular pieces of furniture.
pub fn furnished_room() -> Vec<Wall> {
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

pub fn furnished_source() -> Point2<Real> {
    Point2::new(460.88300000000015, 103.88600000000008)
}

pub fn furnished_listener() -> Point2<Real> {
    Point2::new(682.3710000000002, 235.45799999999986)
}
