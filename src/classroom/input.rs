//! Boundary validation for classroom and allocation payloads.
//!
//! Numeric fields are coerced the way form-driven clients send them:
//! JSON integers, floats (truncated toward zero) and integer strings are
//! all accepted.

use std::fmt;

use serde_json::Value;

use super::ClassroomRecord;

/// A request payload that cannot become a domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `roomId`, `capacity` or `floorNo` is absent or empty.
    MissingFields,
    /// A field holds a value of the wrong type or out of range.
    InvalidTypes,
    /// `capacity` is zero or negative.
    NonPositiveCapacity,
    /// `floorNo` is negative.
    NegativeFloor,
    /// `totalStudents` is not an integer.
    InvalidTotalStudents,
    /// `totalStudents` is zero or negative.
    NonPositiveTotalStudents,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Missing required fields"),
            ValidationError::InvalidTypes => write!(f, "Invalid input types"),
            ValidationError::NonPositiveCapacity => write!(f, "Capacity must be greater than 0"),
            ValidationError::NegativeFloor => write!(f, "Floor number cannot be negative"),
            ValidationError::InvalidTotalStudents => write!(f, "Invalid total students value"),
            ValidationError::NonPositiveTotalStudents => {
                write!(f, "Total students must be greater than 0")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Turn an add-classroom payload into a record.
///
/// Expected shape: `{ "roomId", "capacity", "floorNo", "nearWashroom"? }`.
pub fn parse_classroom(input: &Value) -> Result<ClassroomRecord, ValidationError> {
    let room_id = input.get("roomId");
    let capacity = input.get("capacity");
    let floor_no = input.get("floorNo");

    let (room_id, capacity, floor_no) = match (room_id, capacity, floor_no) {
        (Some(r), Some(c), Some(f)) if !is_blank(r) && !is_blank(c) && !f.is_null() => (r, c, f),
        _ => return Err(ValidationError::MissingFields),
    };

    let capacity = coerce_integer(capacity).ok_or(ValidationError::InvalidTypes)?;
    let floor_no = coerce_integer(floor_no).ok_or(ValidationError::InvalidTypes)?;

    if capacity <= 0 {
        return Err(ValidationError::NonPositiveCapacity);
    }
    if floor_no < 0 {
        return Err(ValidationError::NegativeFloor);
    }

    let room_id = room_id.as_str().ok_or(ValidationError::InvalidTypes)?;
    let near_washroom = match input.get("nearWashroom") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(ValidationError::InvalidTypes),
    };

    Ok(ClassroomRecord {
        room_id: room_id.to_string(),
        capacity: u32::try_from(capacity).map_err(|_| ValidationError::InvalidTypes)?,
        floor_no: u32::try_from(floor_no).map_err(|_| ValidationError::InvalidTypes)?,
        near_washroom,
    })
}

/// Extract a positive student count from an allocate payload.
///
/// A missing `totalStudents` counts as zero and is rejected as non-positive.
pub fn parse_total_students(input: &Value) -> Result<u64, ValidationError> {
    let total = match input.get("totalStudents") {
        None | Some(Value::Null) => 0,
        Some(v) => coerce_integer(v).ok_or(ValidationError::InvalidTotalStudents)?,
    };
    if total <= 0 {
        return Err(ValidationError::NonPositiveTotalStudents);
    }
    u64::try_from(total).map_err(|_| ValidationError::InvalidTotalStudents)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?.trunc();
            if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
