// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! A plain two-dimensional point.

/// Integer grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

include!("point_equal.rs");
include!(concat!(env!("OUT_DIR"), "/point_generated.rs"));
