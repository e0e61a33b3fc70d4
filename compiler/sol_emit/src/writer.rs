//! Tree walk and tag dispatch.
//!
//! The emitter owns a single growable output buffer and walks the
//! value tree once, appending the tagged encoding of each node. The
//! walk is purely structural; the only failures are a non-finite
//! number and a length beyond the band-4 ceiling.

use crate::error::EmitError;
use crate::length::write_length;
use crate::number::{encode_number, write_number_payload};
use sol_ir::{List, ObjectLiteral, Value};
use sol_stack::ensure_sufficient_stack;

/// Magic prefix of every emitted artifact.
pub const MAGIC: &[u8; 6] = b"SOLBIN";

const TAG_END: u8 = 0x00;
const TAG_OBJECT: u8 = 0x01;
const TAG_LIST: u8 = 0x02;
const TAG_FUNCTION: u8 = 0x03;
const TAG_TOKEN: u8 = 0x04;
const TAG_NUMBER: u8 = 0x05;
const TAG_STRING: u8 = 0x06;
const TAG_BOOLEAN: u8 = 0x07;
const TAG_FROZEN: u8 = 0x08;

/// Emit a parsed program as a self-delimiting binary blob: the
/// `SOLBIN` magic, each top-level value in order, and a terminating
/// `0x00`.
pub fn emit(program: &List) -> Result<Vec<u8>, EmitError> {
    let mut emitter = Emitter { out: Vec::new() };
    emitter.out.extend_from_slice(MAGIC);
    for value in program {
        emitter.write_value(value)?;
    }
    emitter.out.push(TAG_END);
    Ok(emitter.out)
}

struct Emitter {
    out: Vec<u8>,
}

/// Match the function shape: `(^ :params statements…)`, i.e. a list
/// whose first item is the `^` token and whose second is a frozen
/// parameter list. The `^[…]` shorthand leaves its parameter slot
/// unfrozen and therefore stays an ordinary list.
fn function_form(list: &List) -> Option<(&List, &[Value])> {
    if list.get(0)?.as_token()? != "^" {
        return None;
    }
    let Some(Value::Frozen(inner)) = list.get(1) else {
        return None;
    };
    let params = inner.as_list()?;
    Some((params, &list.items()[2..]))
}

impl Emitter {
    fn write_value(&mut self, value: &Value) -> Result<(), EmitError> {
        ensure_sufficient_stack(|| self.write_value_inner(value))
    }

    fn write_value_inner(&mut self, value: &Value) -> Result<(), EmitError> {
        match value {
            Value::List(list) => self.write_list(list, false),
            // A frozen list folds into the list encoding through the
            // literal flag; any other frozen value gets the wrapper tag.
            Value::Frozen(inner) => match inner.as_ref() {
                Value::List(list) => self.write_list(list, true),
                other => {
                    self.out.push(TAG_FROZEN);
                    self.write_value(other)
                }
            },
            Value::Token(identifier) => self.write_token(identifier),
            Value::Str(contents) => self.write_bytes(TAG_STRING, contents.as_bytes()),
            Value::Number(number) => self.write_number(*number),
            Value::Object(literal) => self.write_object(literal),
        }
    }

    fn write_list(&mut self, list: &List, literal: bool) -> Result<(), EmitError> {
        if let Some((params, statements)) = function_form(list) {
            self.out.push(TAG_FUNCTION);
            // The parameter list was read with `(`, hence literal.
            self.write_sequence(params.object_mode, true, params.items())?;
            return self.write_sequence(false, false, statements);
        }
        self.out.push(TAG_LIST);
        self.write_sequence(list.object_mode, literal, list.items())
    }

    /// A list payload without its tag byte: the two flag bytes, the
    /// banded child count, then each child.
    fn write_sequence(
        &mut self,
        object_mode: bool,
        literal: bool,
        items: &[Value],
    ) -> Result<(), EmitError> {
        self.out.push(u8::from(object_mode));
        self.out.push(u8::from(literal));
        write_length(&mut self.out, items.len() as u64)?;
        for item in items {
            self.write_value(item)?;
        }
        Ok(())
    }

    fn write_token(&mut self, identifier: &str) -> Result<(), EmitError> {
        // The boolean spellings specialise to their own tag.
        match identifier {
            "true" => {
                self.out.push(TAG_BOOLEAN);
                self.out.push(1);
                Ok(())
            }
            "false" => {
                self.out.push(TAG_BOOLEAN);
                self.out.push(0);
                Ok(())
            }
            _ => self.write_bytes(TAG_TOKEN, identifier.as_bytes()),
        }
    }

    fn write_bytes(&mut self, tag: u8, bytes: &[u8]) -> Result<(), EmitError> {
        self.out.push(tag);
        write_length(&mut self.out, bytes.len() as u64)?;
        self.out.extend_from_slice(bytes);
        Ok(())
    }

    fn write_number(&mut self, number: f64) -> Result<(), EmitError> {
        let payload = encode_number(number).ok_or(EmitError::UnsupportedValue {
            reason: "number is not finite",
        })?;
        self.out.push(TAG_NUMBER);
        write_number_payload(&mut self.out, payload)
    }

    fn write_object(&mut self, literal: &ObjectLiteral) -> Result<(), EmitError> {
        self.out.push(TAG_OBJECT);
        let parent = literal.parent().unwrap_or("");
        write_length(&mut self.out, parent.len() as u64)?;
        self.out.extend_from_slice(parent.as_bytes());
        write_length(&mut self.out, literal.len() as u64)?;
        for (key, value) in literal.entries() {
            write_length(&mut self.out, key.len() as u64)?;
            self.out.extend_from_slice(key.as_bytes());
            self.write_value(value)?;
        }
        Ok(())
    }
}
