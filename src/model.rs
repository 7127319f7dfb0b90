use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
}

/// Builds a student record. Callers reject blank names before getting here.
pub fn create_student(name: &str) -> Student {
    Student {
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub table_number: u32,
    /// 1-based position within the owning table.
    pub seat_number: u32,
    pub student: Option<Rc<Student>>,
}

impl Seat {
    pub fn empty(table_number: u32, seat_number: u32) -> Self {
        Self {
            table_number,
            seat_number,
            student: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub color: String,
    pub number: u32,
    pub seats: Vec<Seat>,
}

impl Table {
    /// Rebuilds every seat under this table's number, keeping seat numbers and
    /// student references.
    pub fn new(color: &str, number: u32, seats: &[Seat]) -> Self {
        let seats = seats
            .iter()
            .map(|seat| Seat {
                table_number: number,
                seat_number: seat.seat_number,
                student: seat.student.clone(),
            })
            .collect();
        Self {
            color: color.to_string(),
            number,
            seats,
        }
    }

    /// `count` unassigned seats numbered `1..=count`.
    pub fn with_empty_seats(color: &str, number: u32, count: u32) -> Self {
        let seats: Vec<Seat> = (1..=count).map(|n| Seat::empty(number, n)).collect();
        Self::new(color, number, &seats)
    }

    /// Seat list resized to `count`: existing seats are carried over as-is, new
    /// ones are appended unassigned.
    pub fn resized_seats(&self, count: u32) -> Vec<Seat> {
        (1..=count)
            .map(|n| match self.seats.get(n as usize - 1) {
                Some(seat) => seat.clone(),
                None => Seat::empty(self.number, n),
            })
            .collect()
    }
}
