mod config;
mod distance;
mod nearest_neighbor;
mod neighbors;
mod normalization;
mod voting;

pub use config::{Metric, NearestNeighborConfig, VoteWeighting};
pub use distance::DistanceEngine;
pub use nearest_neighbor::NearestNeighbor;
pub use neighbors::{NeighborDistance, select_nearest};
pub use normalization::{NormalizationParams, compute_params};
pub use voting::{
    VoteTally, ZERO_DISTANCE_THRESHOLD, ZERO_DISTANCE_WEIGHT, uniform_votes, vote, weighted_votes,
    winner,
};
