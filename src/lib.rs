// Copyright 2020 @TwoCookingMice

#![allow(dead_code)]

pub mod core;
pub mod math;
pub mod io;
pub mod integrators;
pub mod renderers;
pub mod sensors;
pub mod shapes;
