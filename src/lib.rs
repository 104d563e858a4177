// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![doc = include_str!("../README.md")]
#![no_std]

mod codec;
mod error;
mod exchange;
mod frame;

#[cfg(feature = "requester")]
pub use codec::requester;
#[cfg(feature = "responder")]
pub use codec::responder;
pub use error::*;
pub use exchange::*;
pub use frame::*;
