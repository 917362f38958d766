/// Returns the index of the largest element.
/// On ties the first maximum wins.
pub fn argmax<T: PartialOrd>(iter: impl Iterator<Item = T>) -> Option<usize> {
    iter.enumerate()
        .fold(None, |best: Option<(usize, T)>, (i, v)| match best {
            Some((j, b)) if b >= v => Some((j, b)),
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod test {
    use super::argmax;

    #[test]
    fn argmax_first() {
        assert_eq!(argmax(Vec::<f64>::new().into_iter()), None);
        assert_eq!(argmax([1.0].iter()), Some(0));
        assert_eq!(argmax([1.0, 3.0, 2.0].iter()), Some(1));
        assert_eq!(argmax([2.0, 1.0, 2.0].iter()), Some(0));
        assert_eq!(argmax([-1.0, 0.5, 0.5, 0.5].iter()), Some(1));
    }
}
