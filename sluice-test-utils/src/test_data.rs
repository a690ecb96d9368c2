// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Heterogeneous fixture records used across the workspace tests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person { name: String, age: u32 },
    Animal { name: String, legs: u32 },
}

impl TestData {
    #[must_use]
    pub const fn is_person(&self) -> bool {
        matches!(self, TestData::Person { .. })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TestData::Person { name, .. } | TestData::Animal { name, .. } => name,
        }
    }

    /// Age for people, leg count for animals.
    #[must_use]
    pub const fn measure(&self) -> u32 {
        match self {
            TestData::Person { age, .. } => *age,
            TestData::Animal { legs, .. } => *legs,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person { name, age } => write!(f, "Person[name={name}, age={age}]"),
            TestData::Animal { name, legs } => write!(f, "Animal[name={name}, legs={legs}]"),
        }
    }
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person {
        name: name.to_string(),
        age,
    }
}

pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal {
        name: name.to_string(),
        legs,
    }
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_cat() -> TestData {
    animal("Cat", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

/// Alice, Dog, Bob, Spider, Charlie, Cat: people and animals interleaved.
#[must_use]
pub fn mixed() -> Vec<TestData> {
    vec![
        person_alice(),
        animal_dog(),
        person_bob(),
        animal_spider(),
        person_charlie(),
        animal_cat(),
    ]
}
