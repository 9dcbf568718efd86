// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod extract;
pub mod models;
pub mod source;
pub mod store;
pub mod utils;
