mod closed_sets;
mod payload;
