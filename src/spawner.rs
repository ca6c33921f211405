/*
 * Spawner Module
 *
 * Builds the initial sky population. Types are drawn by spawn weight among
 * the types that have not reached their cap yet, so a satisfiable request
 * always finishes in exactly `total_count` draws.
 */

use rand::Rng;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::catalog::{Movement, ObjectType};
use crate::error::SkyError;
use crate::sampling::WeightedChoice;
use crate::sky_object::SkyObject;

// Larger populations grow the vector as they go
const MAX_PREALLOCATED: usize = 1024;

/// How many objects to spawn and how many of any one type are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPlan {
    pub total_count: usize,
    pub per_type_cap: usize,
}

impl Default for SpawnPlan {
    fn default() -> Self {
        Self {
            total_count: crate::MAX_OBJECTS,
            per_type_cap: crate::MAX_PER_TYPE,
        }
    }
}

impl SpawnPlan {
    pub fn new(total_count: usize, per_type_cap: usize) -> Result<Self, SkyError> {
        let plan = Self { total_count, per_type_cap };
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), SkyError> {
        let type_count = ObjectType::COUNT;
        let capacity = self.per_type_cap.saturating_mul(type_count);
        if capacity < self.total_count {
            return Err(SkyError::UnsatisfiableSpawn {
                total_count: self.total_count,
                per_type_cap: self.per_type_cap,
                type_count,
            });
        }
        Ok(())
    }
}

/// Spawn a population in id order, ids starting at 1.
pub fn spawn<R: Rng + ?Sized>(
    plan: SpawnPlan,
    canvas: &Canvas,
    rng: &mut R,
) -> Result<Vec<SkyObject>, SkyError> {
    plan.validate()?;

    let movements = Movement::table()?;
    let mut counts = [0usize; ObjectType::COUNT];
    let mut objects = Vec::with_capacity(plan.total_count.min(MAX_PREALLOCATED));

    while objects.len() < plan.total_count {
        let open_types = WeightedChoice::new(
            ObjectType::ALL
                .iter()
                .filter(|t| counts[t.index()] < plan.per_type_cap)
                .map(|&t| (t, t.spawn_weight())),
        )?;
        let kind = open_types.sample(rng);
        let movement = movements.sample(rng);
        counts[kind.index()] += 1;

        let id = objects.len() as u32 + 1;
        let object = SkyObject::spawn(id, kind, movement, canvas, rng);
        debug!(
            id,
            kind = %kind,
            movement = %movement,
            x = object.position().x,
            y = object.position().y,
            depth = object.depth(),
            "spawned sky object"
        );
        objects.push(object);
    }

    info!(total = objects.len(), counts = ?summarize(&counts), "sky populated");
    Ok(objects)
}

/// Number of objects of each type, in catalog order.
pub fn type_counts(objects: &[SkyObject]) -> Vec<(ObjectType, usize)> {
    let mut counts = [0usize; ObjectType::COUNT];
    for object in objects {
        counts[object.kind().index()] += 1;
    }
    summarize(&counts)
}

fn summarize(counts: &[usize; ObjectType::COUNT]) -> Vec<(ObjectType, usize)> {
    ObjectType::ALL.iter().map(|&t| (t, counts[t.index()])).collect()
}
