

#[cfg(test)]
mod config;
