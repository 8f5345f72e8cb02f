//! Build one object of each shape and print its string forms.
//!
//! Usage: cargo run -p celestial --example catalog

use celestial::{
    AstronomicalObject, BodyError, CelestialObject, CompoundObject, Exoplanet, Parallax,
    SimpleBody, Star,
};
use units::{Length, Mass, Temperature, Time};

fn main() -> Result<(), BodyError> {
    let catalog: Vec<CelestialObject> = vec![
        AstronomicalObject::new(
            "Earth",
            Time::from_years(4.543e9),
            Some(Mass::from_kg(5.9742e24)),
            None,
            None,
        )?
        .into(),
        SimpleBody::new(
            "Earth",
            Time::from_years(4.543e9),
            Some(Mass::from_kg(5.9742e24)),
            Length::from_m(637100.0),
            Temperature::from_kelvin(288.0),
            None,
            None,
        )?
        .into(),
        Star::new(
            "Sun",
            Time::from_years(4.603e9),
            Some(Mass::from_kg(1.989e30)),
            Length::from_m(6.9634e8),
            0.0,
            Temperature::from_kelvin(5778.0),
            None,
            None,
        )?
        .into(),
        Exoplanet::new(
            "Jupiter",
            Time::from_years(4.603e9),
            Some(Mass::from_kg(1.8987e27)),
            Length::from_m(69.911e6),
            false,
            Temperature::from_kelvin(163.0),
            Parallax::new(Length::from_m(6.378e6), 2.2),
            None,
        )?
        .into(),
        CompoundObject::new(
            "Andromeda",
            Time::from_years(1.001e10),
            1.23e12,
            0.001004,
            "Galaxy",
        )
        .into(),
    ];

    for object in &catalog {
        println!("{object}");
        println!("  {}", object.debug_form());
        match object.distance() {
            Some(d) => println!("  distance: {d}"),
            None => println!("  distance: no estimate"),
        }
    }

    // The one mutable mass in the model
    let mut andromeda = CompoundObject::new(
        "Andromeda",
        Time::from_years(1.001e10),
        1.23e12,
        0.001004,
        "Galaxy",
    );
    andromeda.set_mass_relative(1.5e12)?;
    println!("revised: {andromeda}");

    Ok(())
}
