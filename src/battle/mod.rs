pub mod combatant;
pub mod damage;
pub mod descriptor;
pub mod resolver;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod tests;
