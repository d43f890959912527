pub mod common;

#[cfg(test)]
mod test_resolver_flow;

#[cfg(test)]
mod test_secondary_effects;



#[cfg(test)]
mod test_switch_in;
