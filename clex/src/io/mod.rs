// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod output_format;
mod sink;
mod source;

pub use self::{
    output_format::OutputFormat,
    sink::{Sink, TraceWriter},
    source::{ReaderSource, Source, StrSource},
};
