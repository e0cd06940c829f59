use regcraft_lib::helpers;

pub fn run() {
    for (name, _) in helpers::ALL {
        println!("{name}");
    }
}
