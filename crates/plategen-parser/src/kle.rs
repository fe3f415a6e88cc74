use plategen_core::{decimal, Decimal, Key, KeyOutOfRange};
use serde_json::{Map, Value};

use crate::Error;

/// Modifier keys that place or shape keys. A leading object carrying none of them is keyboard
/// metadata (name, author, notes, ...).
const PLACEMENT_KEYS: [&str; 14] = [
    "r", "rx", "ry", "d", "w", "h", "w2", "h2", "_rs", "_rc", "_ss", "_so", "x", "y",
];

#[derive(Debug, Clone)]
struct Cursor {
    x: Decimal,
    y: Decimal,
    angle: Decimal,
    rotation_x: Decimal,
    rotation_y: Decimal,
    cluster_x: Decimal,
    cluster_y: Decimal,
}

/// Per-key overrides; reset after every key label.
#[derive(Debug, Clone)]
struct Pending {
    decal: bool,
    width: Decimal,
    height: Decimal,
    width2: Option<Decimal>,
    height2: Option<Decimal>,
    stabilizer_angle: Decimal,
    independent_switch_angle: Decimal,
    shift_6u_stabilizers: bool,
    skip_orientation_fix: bool,
}

impl Default for Pending {
    fn default() -> Self {
        Self {
            decal: false,
            width: Decimal::ONE,
            height: Decimal::ONE,
            width2: None,
            height2: None,
            stabilizer_angle: Decimal::ZERO,
            independent_switch_angle: Decimal::ZERO,
            shift_6u_stabilizers: false,
            skip_orientation_fix: false,
        }
    }
}

/// Parses relaxed-JSON layout text into keys in document order.
///
/// Text that is not a valid document on its own is retried wrapped in `[` `]`, so the bare row
/// list copied out of the layout editor is accepted.
pub fn resolve(text: &str) -> Result<Vec<Key>, Error> {
    let value = match json5::from_str::<Value>(text) {
        Ok(v) => v,
        Err(first) => {
            tracing::debug!(error = %first, "layout is not a document, retrying as a row list");
            json5::from_str::<Value>(&format!("[{text}]"))
                .map_err(|e| Error::Syntax(e.to_string()))?
        }
    };
    resolve_value(&value)
}

pub fn resolve_value(value: &Value) -> Result<Vec<Key>, Error> {
    let Value::Array(rows) = value else {
        return Err(Error::RootNotArray);
    };

    let mut start = 0usize;
    if let Some(Value::Object(meta)) = rows.first() {
        if is_metadata(meta) {
            tracing::debug!(fields = meta.len(), "skipping keyboard metadata");
            start = 1;
        }
    }

    let mut cursor = Cursor {
        x: Decimal::ZERO,
        y: Decimal::ZERO,
        angle: Decimal::ZERO,
        rotation_x: Decimal::ZERO,
        rotation_y: Decimal::ZERO,
        cluster_x: Decimal::ZERO,
        cluster_y: Decimal::ZERO,
    };
    let mut pending = Pending::default();
    let mut keys = Vec::new();

    for (row_idx, row) in rows.iter().enumerate().skip(start) {
        let Value::Array(items) = row else {
            return Err(Error::RowNotArray { row: row_idx });
        };

        for (item_idx, item) in items.iter().enumerate() {
            match item {
                Value::String(_) => {
                    let out_of_range = || Error::OutOfRange {
                        row: row_idx,
                        item: item_idx,
                    };
                    let next_x = cursor.x.checked_add(pending.width).ok_or_else(out_of_range)?;
                    if pending.decal {
                        pending.decal = false;
                    } else {
                        keys.push(commit(&cursor, &pending).map_err(|_| out_of_range())?);
                    }
                    cursor.x = next_x;
                    pending = Pending::default();
                }
                Value::Object(props) => apply_modifiers(props, row_idx, &mut cursor, &mut pending)?,
                other => {
                    return Err(Error::InvalidElement {
                        row: row_idx,
                        item: item_idx,
                        found: kind(other),
                    })
                }
            }
        }

        cursor.x = cursor.rotation_x;
        cursor.y = cursor
            .y
            .checked_add(Decimal::ONE)
            .ok_or(Error::OutOfRange {
                row: row_idx,
                item: items.len(),
            })?;
    }

    tracing::debug!(keys = keys.len(), "resolved layout");
    Ok(keys)
}

fn is_metadata(props: &Map<String, Value>) -> bool {
    !PLACEMENT_KEYS.iter().any(|k| props.contains_key(*k))
}

fn commit(cursor: &Cursor, pending: &Pending) -> Result<Key, KeyOutOfRange> {
    Key::builder()
        .x(cursor.x)
        .y(cursor.y)
        .width(pending.width)
        .height(pending.height)
        .maybe_width2(pending.width2)
        .maybe_height2(pending.height2)
        .angle(cursor.angle)
        .rotation_x(cursor.rotation_x)
        .rotation_y(cursor.rotation_y)
        .independent_switch_angle(pending.independent_switch_angle)
        .stabilizer_angle(pending.stabilizer_angle)
        .shift_6u_stabilizers(pending.shift_6u_stabilizers)
        .skip_orientation_fix(pending.skip_orientation_fix)
        .build()
}

fn apply_modifiers(
    props: &Map<String, Value>,
    row: usize,
    cursor: &mut Cursor,
    pending: &mut Pending,
) -> Result<(), Error> {
    if let Some(r) = decimal_field(props, "r", row)? {
        cursor.angle = r;
    }
    if let Some(rx) = decimal_field(props, "rx", row)? {
        cursor.rotation_x = rx;
        cursor.cluster_x = rx;
        cursor.x = cursor.cluster_x;
        cursor.y = cursor.cluster_y;
    }
    if let Some(ry) = decimal_field(props, "ry", row)? {
        cursor.rotation_y = ry;
        cursor.cluster_y = ry;
        cursor.x = cursor.cluster_x;
        cursor.y = cursor.cluster_y;
    }
    if let Some(d) = bool_field(props, "d", row)? {
        pending.decal = d;
    }
    if let Some(w) = decimal_field(props, "w", row)? {
        pending.width = w;
    }
    if let Some(h) = decimal_field(props, "h", row)? {
        pending.height = h;
    }
    if let Some(w2) = decimal_field(props, "w2", row)? {
        pending.width2 = Some(w2);
    }
    if let Some(h2) = decimal_field(props, "h2", row)? {
        pending.height2 = Some(h2);
    }
    if let Some(rs) = decimal_field(props, "_rs", row)? {
        pending.stabilizer_angle = rs;
    }
    if let Some(rc) = decimal_field(props, "_rc", row)? {
        pending.independent_switch_angle = rc;
    }
    if let Some(ss) = bool_field(props, "_ss", row)? {
        pending.shift_6u_stabilizers = ss;
    }
    if let Some(so) = bool_field(props, "_so", row)? {
        pending.skip_orientation_fix = so;
    }
    if let Some(dx) = decimal_field(props, "x", row)? {
        cursor.x = offset(cursor.x, dx, props, "x", row)?;
    }
    if let Some(dy) = decimal_field(props, "y", row)? {
        cursor.y = offset(cursor.y, dy, props, "y", row)?;
    }
    Ok(())
}

fn decimal_field(
    props: &Map<String, Value>,
    field: &'static str,
    row: usize,
) -> Result<Option<Decimal>, Error> {
    let Some(value) = props.get(field) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => decimal::parse(&n.to_string()),
        Value::String(s) => decimal::parse(s),
        _ => None,
    };
    parsed.map(Some).ok_or_else(|| Error::InvalidField {
        row,
        field,
        value: value.to_string(),
    })
}

/// Additive cursor move; a sum past the decimal range is reported against the field.
fn offset(
    at: Decimal,
    by: Decimal,
    props: &Map<String, Value>,
    field: &'static str,
    row: usize,
) -> Result<Decimal, Error> {
    at.checked_add(by).ok_or_else(|| Error::InvalidField {
        row,
        field,
        value: props.get(field).map(Value::to_string).unwrap_or_default(),
    })
}

fn bool_field(
    props: &Map<String, Value>,
    field: &'static str,
    row: usize,
) -> Result<Option<bool>, Error> {
    match props.get(field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => Ok(Some(n.as_f64().is_some_and(|v| v != 0.0))),
        Some(other) => Err(Error::InvalidField {
            row,
            field,
            value: other.to_string(),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
