// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0

//! The boilerplate run function for desktop platforms

// On Windows platform, don't show a console when opening the app.
#![windows_subsystem = "windows"]

use xilem::EventLoop;
use xilem::winit::error::EventLoopError;

fn main() -> Result<(), EventLoopError> {
    marquee::run(EventLoop::with_user_event())
}
