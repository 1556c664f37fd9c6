use dyndim_core::{make_ddim, Dim};

fn main() {
    let image = make_ddim(&[3, 224, 224]).unwrap();
    println!("shape: {image}");
    println!("rank: {}", image.arity());
    println!("elements: {}", image.product());

    let batched = (image * make_ddim(&[8, 1, 1]).unwrap()).unwrap();
    dbg!(batched.vectorize());

    // Cross into statically ranked code once the rank is settled.
    let fixed: Dim<3> = batched.to_dim().unwrap();
    assert_eq!(fixed.as_slice(), &[24, 224, 224]);

    // Mixed ranks refuse to combine.
    let plane = make_ddim(&[224, 224]).unwrap();
    assert!((batched + plane).is_err());
}
