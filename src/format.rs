//! CSON Format Reference
//!
//! This module documents the CSON document format as produced by this
//! library.
//!
//! # Overview
//!
//! A CSON document describes a batch of flat records. It carries its own
//! schema, so a reader needs no out-of-band type information.
//!
//! ```text
//! document      = *schema-clause SEP *data-clause
//! schema-clause = TYPE_DEF type-name *(FIELD_DEF field-name FIELD_TYPE tag)
//! data-clause   = OBJECT_VAL type-name *(FIELD_VAL value)
//! ```
//!
//! An empty batch produces an empty document (no separator at all). Every
//! non-empty document contains the separator exactly once.
//!
//! # Markers
//!
//! | Marker | Default | Role |
//! |--------|---------|------|
//! | `TYPE_DEF` | `🍽` | begins a schema clause |
//! | `FIELD_DEF` | `🥣` | precedes a field's exposed name |
//! | `FIELD_TYPE` | `🧂` | separates a field's name from its tag |
//! | `SEP` | `🔥` | separates the schema section from the data section |
//! | `OBJECT_VAL` | `🍲` | begins a data clause |
//! | `FIELD_VAL` | `🌶️` | precedes each value (U+1F336 followed by U+FE0F) |
//!
//! All markers can be replaced through [`Markers`](crate::Markers); the
//! replacements must be non-empty and no token may be a prefix of another.
//!
//! # Type Tags
//!
//! | Tag | Values |
//! |-----|--------|
//! | `int32` | signed 32-bit integer, decimal |
//! | `int64` | signed 64-bit integer, decimal |
//! | `float32` | 32-bit float, shortest round-trip form |
//! | `float64` | 64-bit float, shortest round-trip form |
//! | `boolean` | `✅` for true, `❌` for false |
//! | `string` | escaped text |
//!
//! Floats always show a decimal point or an exponent: `42.0`, `0.1`, `1e21`,
//! `1e-7`. Non-finite values are written as `NaN`, `inf` and `-inf`.
//!
//! # Schema Section
//!
//! One clause per distinct type name, in the order the names first occur in
//! the batch. Fields appear in ascending lexicographic order of their
//! *declared* identifiers, even when they are renamed:
//!
//! ```text
//! 🍽Student🥣age🧂int32🥣fullName🧂string
//! ```
//!
//! Here `fullName` is the exposed name of a field declared as `name`, which
//! sorts after `age`.
//!
//! # Data Section
//!
//! One clause per record, in input order, with values in the field order of
//! the record type's schema clause:
//!
//! ```text
//! 🍲Student🌶️36🌶️Ada
//! ```
//!
//! # Escaping
//!
//! Strings, type names and field names are escaped with `\`:
//!
//! - `\` becomes `\\`
//! - any character that begins a marker or a boolean token is prefixed
//!   with `\`
//!
//! Every other character is written unchanged. Reading `\X` as `X` restores
//! the original text, and escaped text can never contain a marker.
//!
//! ```text
//! hot 🔥 take   ->   hot \🔥 take
//! C:\temp       ->   C:\\temp
//! ```
//!
//! # Complete Example
//!
//! Two records, `Foo { fooField: 42 }` and `Bar { barField: "Hello" }`:
//!
//! ```text
//! 🍽Foo🥣fooField🧂int32🍽Bar🥣barField🧂string🔥🍲Foo🌶️42🍲Bar🌶️Hello
//! ```
//!
//! # Limitations
//!
//! - **Flat records only**: nested records, optional values and sequences
//!   have no tag
//! - **No top-level sequences**: a batch is a sequence of records; a sequence
//!   is never a record itself
//! - **No decoder**: this library only writes the format

// This module contains only documentation; no implementation code
