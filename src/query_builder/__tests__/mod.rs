


#[cfg(test)]
mod where_clause;



#[cfg(test)]
mod limit;
