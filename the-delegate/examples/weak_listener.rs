use std::{
  cell::RefCell,
  rc::Rc,
};

use the_delegate::Delegate;

struct StatusBar {
  messages: RefCell<Vec<String>>,
}

impl StatusBar {
  fn show(&self, message: String) -> usize {
    self.messages.borrow_mut().push(message);
    self.messages.borrow().len()
  }
}

fn main() {
  let status = Rc::new(StatusBar {
    messages: RefCell::new(Vec::new()),
  });

  let mut on_save = Delegate::<usize, (String,)>::new();
  on_save.bind_weak_object(&status, StatusBar::show);

  println!("{:?}", on_save.execute("saved main.rs".to_string()));
  println!("{:?}", on_save.execute("saved lib.rs".to_string()));

  // Closing the status bar does not need to touch the delegate.
  drop(status);
  println!("{:?}", on_save.execute("saved mod.rs".to_string()));
  println!("{:?}", on_save.try_execute("saved mod.rs".to_string()));
}
