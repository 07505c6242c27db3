// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-buffer.

use thiserror::Error;

/// Errors from word-buffer operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The operation requires operands of identical significant length.
    #[error("operand length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch {
        /// Significant length of the left operand.
        left: usize,
        /// Significant length of the right operand.
        right: usize,
    },
}
