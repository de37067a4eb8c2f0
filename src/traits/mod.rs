// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod encoder;
pub mod launcher;
pub mod renderer;

pub use encoder::Encoder;
pub use launcher::HostLauncher;
pub use renderer::PdfRenderer;
