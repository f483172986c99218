//! Scene descriptions: the textual format and its parser
//!
//! A scene is a sequence of whitespace-delimited records, one per line,
//! the first token selecting the record kind:
//!
//! ```text
//! mass      <id:int> <x> <y> <mass>
//! fixedMass <id:int> <x> <y> <mass>
//! spring    <id1:int> <id2:int> <restLength> <k>
//! muscle    <id1:int> <id2:int> <restLength> <k> <amplitude> <phaseDelay> <frequency>
//! ```
//!
//! Blank lines are skipped; any other leading token is rejected. Ids are
//! scoped to one parse and must be declared by a `mass`/`fixedMass`
//! record before a `spring`/`muscle` record references them.
//!
//! [`parse`] is pure text-to-data: it performs no I/O and touches no
//! group, so loading is all-or-nothing by construction. The caller merges
//! the resulting [`Scene`] into a group only after the whole parse
//! succeeded.

use std::collections::HashMap;

use thiserror::Error;

use crate::simulation::links::Connector;
use crate::simulation::states::Entity;

/// Why a scene description failed to load.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// Malformed record: wrong field count, a non-numeric field, or an
    /// unknown record kind.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A `spring`/`muscle` record referenced an id no `mass`/`fixedMass`
    /// record declared.
    #[error("line {line}: reference to undeclared entity id {id}")]
    DanglingReference { line: usize, id: i64 },
}

/// A parsed scene: entities plus connectors whose endpoints are already
/// resolved to indices into `entities`.
#[derive(Debug, Default)]
pub struct Scene {
    pub entities: Vec<Entity>,
    pub connectors: Vec<Connector>,
}

/// Parse a scene description into entities and connectors.
pub fn parse(text: &str) -> Result<Scene, SceneError> {
    let mut scene = Scene::default();
    // Declared ids, mapped to indices into scene.entities. A re-declared
    // id keeps both entities but later references resolve to the newest.
    let mut ids: HashMap<i64, usize> = HashMap::new();

    for (line_idx, raw) in text.lines().enumerate() {
        let line = line_idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        let Some((&kind, args)) = fields.split_first() else {
            continue; // blank line
        };

        match kind {
            "mass" | "fixedMass" => {
                let [id, x, y, m] = expect_args(args, kind, line)?;
                let id: i64 = num(id, line)?;
                let (x, y, m) = (num(x, line)?, num(y, line)?, num(m, line)?);
                let entity = if kind == "mass" {
                    Entity::free(x, y, m)
                } else {
                    Entity::anchored(x, y, m)
                };
                let index = scene.entities.len();
                scene.entities.push(entity);
                ids.insert(id, index);
            }
            "spring" => {
                let [id1, id2, rest, k] = expect_args(args, kind, line)?;
                let start = resolve(&ids, num(id1, line)?, line)?;
                let end = resolve(&ids, num(id2, line)?, line)?;
                scene
                    .connectors
                    .push(Connector::linear(start, end, num(rest, line)?, num(k, line)?));
            }
            "muscle" => {
                let [id1, id2, rest, k, amp, delay, freq] = expect_args(args, kind, line)?;
                let start = resolve(&ids, num(id1, line)?, line)?;
                let end = resolve(&ids, num(id2, line)?, line)?;
                scene.connectors.push(Connector::oscillating(
                    start,
                    end,
                    num(rest, line)?,
                    num(k, line)?,
                    num(amp, line)?,
                    num(delay, line)?,
                    num(freq, line)?,
                ));
            }
            other => {
                return Err(SceneError::Parse {
                    line,
                    reason: format!("unknown record kind `{other}`"),
                });
            }
        }
    }

    Ok(scene)
}

/// Exactly `N` argument fields, or a `Parse` error naming the record kind.
fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    kind: &str,
    line: usize,
) -> Result<[&'a str; N], SceneError> {
    <[&str; N]>::try_from(args).map_err(|_| SceneError::Parse {
        line,
        reason: format!("`{kind}` expects {N} fields, got {}", args.len()),
    })
}

/// Parse one numeric field.
fn num<T: std::str::FromStr>(field: &str, line: usize) -> Result<T, SceneError> {
    field.parse().map_err(|_| SceneError::Parse {
        line,
        reason: format!("invalid numeric field `{field}`"),
    })
}

fn resolve(ids: &HashMap<i64, usize>, id: i64, line: usize) -> Result<usize, SceneError> {
    ids.get(&id)
        .copied()
        .ok_or(SceneError::DanglingReference { line, id })
}
