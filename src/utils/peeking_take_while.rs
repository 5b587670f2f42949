/// A `take_while` for peekable iterators that leaves the first rejected item
/// in place, so the caller can still inspect it.
use std::iter::Peekable;

pub struct PeekingTakeWhile<'a, I: Iterator, P> {
    iter: &'a mut Peekable<I>,
    predicate: P,
}

impl<'a, I, P> Iterator for PeekingTakeWhile<'a, I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next_if(&mut self.predicate)
    }
}

pub trait PeekingTakeWhileExt<I: Iterator> {
    fn peeking_take_while<P>(&mut self, predicate: P) -> PeekingTakeWhile<'_, I, P>
    where
        P: FnMut(&I::Item) -> bool;

    /// Drop items up to, but not including, the first one matching
    /// `predicate`. Returns how many were dropped.
    fn skip_until<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.peeking_take_while(|item| !predicate(item)).count()
    }
}

impl<I: Iterator> PeekingTakeWhileExt<I> for Peekable<I> {
    fn peeking_take_while<P>(&mut self, predicate: P) -> PeekingTakeWhile<'_, I, P>
    where
        P: FnMut(&I::Item) -> bool,
    {
        PeekingTakeWhile {
            iter: self,
            predicate,
        }
    }
}
