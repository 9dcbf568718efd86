// Copyright (c) 2025 Paperfolio contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod scan;
pub mod watch;
