extern crate dense_index_set;
use dense_index_set::{DenseIndexSet, DenseSetError};

fn main() -> Result<(), DenseSetError> {
    let mut a: DenseIndexSet = DenseIndexSet::from_values(10, [1, 2, 3])?;
    let b: DenseIndexSet = DenseIndexSet::from_values(10, [2, 3, 4])?;

    // Prints {2, 3} {1, 2, 3, 4} {1, 4}
    println!("{} {} {}", &a & &b, &a | &b, &a ^ &b);

    a.difference_update([1, 3, 7])?;
    if !a.contains(1)? {
        println!("Value 1 is not in the set");
    }

    // Prints 2
    for v in &a {
        print!("{} ", v);
    }
    println!();

    if let Err(err) = a.add(10) {
        println!("{err}");
    }

    Ok(())
}
