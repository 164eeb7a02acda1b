//! Minimal in-crate host for unit tests.

use std::borrow::Cow;
use std::cell::Cell;

use backdoor_common::{chunk_count, VecVal};

use crate::host::SimHost;

struct Object {
    name: String,
    width: u32,
    int: i64,
    value: Vec<VecVal>,
}

/// A table of named objects that records how often it is touched.
#[derive(Default)]
pub(crate) struct FakeHost {
    objects: Vec<Object>,
    pub lookups: Cell<usize>,
    pub int_reads: Cell<usize>,
    pub value_reads: Cell<usize>,
    pub puts: Vec<Vec<VecVal>>,
}

impl FakeHost {
    pub fn with_signal(mut self, name: &str, width: u32) -> Self {
        self.objects.push(Object {
            name: name.to_string(),
            width,
            int: 0,
            value: vec![VecVal::default(); chunk_count(width)],
        });
        self
    }

    pub fn with_param(mut self, name: &str, value: i64) -> Self {
        self.objects.push(Object {
            name: name.to_string(),
            width: 32,
            int: value,
            value: vec![VecVal::from_u32(value as u32)],
        });
        self
    }

    pub fn set_param(&mut self, name: &str, value: i64) {
        if let Some(obj) = self.objects.iter_mut().find(|o| o.name == name) {
            obj.int = value;
        }
    }

    pub fn raw(&self, name: &str) -> &[VecVal] {
        let obj = self.objects.iter().find(|o| o.name == name);
        obj.map(|o| o.value.as_slice()).unwrap_or(&[])
    }

    pub fn set_raw(&mut self, name: &str, value: &[VecVal]) {
        if let Some(obj) = self.objects.iter_mut().find(|o| o.name == name) {
            obj.value = value.to_vec();
        }
    }

    pub fn value_accesses(&self) -> usize {
        self.value_reads.get() + self.puts.len()
    }
}

impl SimHost for FakeHost {
    type Handle = usize;

    fn handle_by_name(&self, path: &str) -> Option<usize> {
        self.lookups.set(self.lookups.get() + 1);
        self.objects.iter().position(|o| o.name == path)
    }

    fn size(&self, handle: &usize) -> u32 {
        self.objects[*handle].width
    }

    fn int_value(&self, handle: &usize) -> i64 {
        self.int_reads.set(self.int_reads.get() + 1);
        self.objects[*handle].int
    }

    fn put_vector(&mut self, handle: &usize, value: &[VecVal]) {
        self.puts.push(value.to_vec());
        self.objects[*handle].value = value.to_vec();
    }

    fn get_vector(&self, handle: &usize) -> Cow<'_, [VecVal]> {
        self.value_reads.set(self.value_reads.get() + 1);
        Cow::Borrowed(&self.objects[*handle].value)
    }
}
