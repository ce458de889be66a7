
#[cfg(test)]
mod helpers;



#[cfg(test)]
mod aggr;

#[cfg(test)]
mod order;
